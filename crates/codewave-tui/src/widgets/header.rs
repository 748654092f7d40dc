//! Fixed navigation header

use codewave_core::catalog::COMPANY_NAME;
use codewave_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

/// Brand plus one link per section, the active one highlighted.
///
/// The border lights up once the page is scrolled past the top, mirroring
/// the translucent header of the browser build.
pub struct NavHeader {
    active: SectionId,
    scrolled: bool,
}

impl NavHeader {
    pub fn new(active: SectionId, scrolled: bool) -> Self {
        Self { active, scrolled }
    }
}

impl Widget for NavHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("◆ ", styles::accent()),
            Span::styled(COMPANY_NAME, styles::heading()),
            Span::raw("   "),
        ];
        for (i, section) in SectionId::ALL.iter().enumerate() {
            spans.push(Span::styled(format!("{}", i + 1), styles::keybinding()));
            let style = if *section == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", section.label()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .block(styles::glass_block(self.scrolled))
            .render(area, buf);
    }
}
