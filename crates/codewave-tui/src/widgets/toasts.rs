//! Toast notifications stacked in the top-right corner

use codewave_app::{Toast, ToastKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

use super::text::truncate;
use crate::theme::styles;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastStack<'a> {
    toasts: &'a [Toast],
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast]) -> Self {
        Self { toasts }
    }
}

fn icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
        ToastKind::Info => "i",
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let inner = usize::from(width.saturating_sub(4));
        let x = area.x + area.width - width;

        // Newest on top
        for (slot, toast) in self.toasts.iter().rev().enumerate() {
            let y = area.y + slot as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            Clear.render(rect, buf);

            let style = styles::toast(toast.kind);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(style);
            Paragraph::new(vec![
                Line::styled(
                    truncate(&format!("{} {}", icon(toast.kind), toast.title), inner),
                    style,
                ),
                Line::styled(truncate(&toast.description, inner), styles::text_secondary()),
            ])
            .block(block)
            .render(rect, buf);
        }
    }
}
