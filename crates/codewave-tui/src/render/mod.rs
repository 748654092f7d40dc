//! Main render/view function (View in TEA pattern)


use codewave_app::{AppState, UiMode};
use codewave_core::{SectionBounds, SectionId};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    About, Contact, Footer, Hero, KeyHints, LoaderOverlay, NavHeader, NavMenu, PageSection,
    Portfolio, Services, Technologies, ToastStack,
};

/// What a layout pass measured, reported back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGeometry {
    pub bounds: Vec<SectionBounds>,
    pub content_height: u32,
    pub viewport: u32,
}

/// Stacks sections top to bottom and copies the rows inside the viewport
/// into the frame.
///
/// Each section is drawn into its own scratch buffer first, so a section
/// cut off by the viewport edge still renders its borders correctly.
struct PageCanvas {
    viewport: Rect,
    scroll: u32,
    offset: u32,
    bounds: Vec<SectionBounds>,
}

impl PageCanvas {
    fn new(viewport: Rect, scroll: u32) -> Self {
        Self {
            viewport,
            scroll,
            offset: 0,
            bounds: Vec::with_capacity(SectionId::ALL.len()),
        }
    }

    fn place<S: PageSection>(&mut self, buf: &mut Buffer, section: Option<SectionId>, widget: S) {
        let width = self.viewport.width;
        let height = widget.height(width);
        let top = self.offset;
        let bottom = top + u32::from(height);

        let view_top = self.scroll;
        let view_bottom = self.scroll + u32::from(self.viewport.height);

        if height > 0 && top < view_bottom && bottom > view_top {
            let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
            widget.render(scratch.area, &mut scratch);

            for row in top.max(view_top)..bottom.min(view_bottom) {
                // Both differences are bounded by u16 heights
                let src_y = (row - top) as u16;
                let dst_y = self.viewport.y + (row - view_top) as u16;
                for x in 0..width {
                    if let (Some(src), Some(dst)) = (
                        scratch.cell((x, src_y)),
                        buf.cell_mut((self.viewport.x + x, dst_y)),
                    ) {
                        *dst = src.clone();
                    }
                }
            }
        }

        if let Some(section) = section {
            self.bounds
                .push(SectionBounds::new(section, top, u32::from(height)));
        }
        self.offset = bottom;
    }

    fn finish(self) -> PageGeometry {
        PageGeometry {
            bounds: self.bounds,
            content_height: self.offset,
            viewport: u32::from(self.viewport.height),
        }
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; the measured page geometry is returned so
/// the caller can feed it back through the update loop.
pub fn view(frame: &mut Frame, state: &AppState) -> PageGeometry {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let active = state.tracker.active();

    frame.render_widget(
        NavHeader::new(active, state.tracker.scrolled()),
        areas.header,
    );

    let portfolio = state.portfolio_view();
    let max_tags = state.settings.portfolio.max_tags;
    let mut canvas = PageCanvas::new(areas.body, state.page.scroll);
    {
        let buf = frame.buffer_mut();
        canvas.place(
            buf,
            Some(SectionId::Home),
            Hero::new(&state.hero, active == SectionId::Home),
        );
        canvas.place(
            buf,
            Some(SectionId::Services),
            Services::new(active == SectionId::Services),
        );
        canvas.place(
            buf,
            Some(SectionId::Portfolio),
            Portfolio::new(&state.filter, &portfolio, max_tags)
                .searching(state.ui_mode == UiMode::Search)
                .active(active == SectionId::Portfolio),
        );
        canvas.place(
            buf,
            Some(SectionId::Technologies),
            Technologies::new(&state.tech, active == SectionId::Technologies),
        );
        canvas.place(
            buf,
            Some(SectionId::About),
            About::new(&state.counters, active == SectionId::About),
        );
        canvas.place(
            buf,
            Some(SectionId::Contact),
            Contact::new(&state.contact, state.focused_field)
                .editing(state.ui_mode == UiMode::Form)
                .active(active == SectionId::Contact),
        );
        canvas.place(buf, None, Footer);
    }
    let geometry = canvas.finish();

    frame.render_widget(KeyHints::new(state.ui_mode), areas.hints);

    if state.menu_open() {
        frame.render_widget(NavMenu::new(state.menu_index, active), areas.body);
    }

    if !state.toasts.is_empty() {
        frame.render_widget(ToastStack::new(state.toasts.items()), areas.body);
    }

    if state.loader.is_visible() {
        frame.render_widget(LoaderOverlay::new(&state.loader), area);
    }

    geometry
}
