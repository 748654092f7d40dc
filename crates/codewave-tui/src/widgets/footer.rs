//! Page footer

use codewave_core::catalog::{COMPANY_NAME, COPYRIGHT, TAGLINE};
use codewave_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::text::truncate;
use super::PageSection;
use crate::theme::styles;

pub struct Footer;

impl Footer {
    fn lines(width: u16) -> Vec<Line<'static>> {
        let inner = usize::from(width.saturating_sub(2));
        let links: Vec<&str> = SectionId::ALL.iter().map(|s| s.label()).collect();
        vec![
            Line::styled("─".repeat(usize::from(width)), styles::border_inactive()),
            Line::from(vec![
                Span::styled(COMPANY_NAME, styles::accent_bold()),
                Span::styled(format!("  {}", truncate(TAGLINE, inner)), styles::text_secondary()),
            ]),
            Line::styled(truncate(&links.join(" · "), inner), styles::text_muted()),
            Line::from(""),
            Line::styled(truncate(COPYRIGHT, inner), styles::text_muted()),
            Line::from(""),
        ]
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Self::lines(area.width)).render(area, buf);
    }
}

impl PageSection for Footer {
    fn height(&self, width: u16) -> u16 {
        Self::lines(width).len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_renders_copyright() {
        let mut term = TestTerminal::with_size(120, Footer.height(120));
        term.render_widget(Footer, term.area());
        assert!(term.buffer_contains("© 2025 CodeWave. All rights reserved."));
        assert!(term.buffer_contains("Technologies"));
    }
}
