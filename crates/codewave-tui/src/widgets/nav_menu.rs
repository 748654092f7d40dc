//! Navigation menu popup

use codewave_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct NavMenu {
    selected: usize,
    active: SectionId,
}

impl NavMenu {
    pub fn new(selected: usize, active: SectionId) -> Self {
        Self { selected, active }
    }
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = SectionId::ALL.len() as u16 + 2;
        let popup = centered_rect(30, height, area);
        Clear.render(popup, buf);

        let lines: Vec<Line> = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let marker = if *section == self.active { "●" } else { " " };
                let style = if i == self.selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), styles::keybinding()),
                    Span::styled(format!("{} {:<20}", marker, section.label()), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(styles::modal_block(" Navigate "))
            .render(popup, buf);
    }
}
