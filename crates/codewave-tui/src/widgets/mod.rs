//! Widget components for the TUI
//!
//! Page sections implement [`PageSection`] so the renderer can measure them
//! before laying the page out; overlays are plain widgets drawn on top.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod hints;
mod loader;
mod nav_menu;
mod portfolio;
mod services;
mod technologies;
mod text;
mod toasts;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::NavHeader;
pub use hero::Hero;
pub use hints::KeyHints;
pub use loader::LoaderOverlay;
pub use nav_menu::NavMenu;
pub use portfolio::Portfolio;
pub use services::Services;
pub use technologies::Technologies;
pub use toasts::ToastStack;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Padding, Paragraph, Widget};

use crate::theme::styles;

/// A full-width block of the scrolling page.
pub trait PageSection: Widget {
    /// Rows the section occupies when rendered `width` columns wide.
    fn height(&self, width: u16) -> u16;
}

/// Render pre-built section lines inside the shared section frame.
///
/// Lines are never wrapped: every section truncates to the inner width
/// itself, which keeps `height` exact.
fn render_section(title: &str, focused: bool, lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(focused)
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1));
    Paragraph::new(lines).block(block).render(area, buf);
}

/// Height of a framed section holding `lines` rows.
fn framed_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

/// Columns available inside a section frame.
fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(4))
}
