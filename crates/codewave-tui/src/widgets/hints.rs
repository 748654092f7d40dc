//! Key hint bar pinned to the bottom row

use codewave_app::UiMode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("j/k", "scroll"),
                ("1-6", "jump"),
                ("m", "menu"),
                ("/", "search"),
                ("c", "category"),
                ("t", "tech"),
                ("f", "contact"),
                ("d", "dismiss"),
                ("q", "quit"),
            ],
            UiMode::Search => &[("type", "filter"), ("Ctrl+U", "clear"), ("Enter/Esc", "done")],
            UiMode::Form => &[
                ("Tab", "next field"),
                ("←/→", "choose"),
                ("Ctrl+S", "send"),
                ("Esc", "leave form"),
            ],
            UiMode::Menu => &[("j/k", "move"), ("Enter", "go"), ("Esc", "close")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.bindings() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hints_follow_mode() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(KeyHints::new(UiMode::Browse), term.area());
        assert!(term.buffer_contains("/ search"));

        term.render_widget(KeyHints::new(UiMode::Form), term.area());
        assert!(term.buffer_contains("Ctrl+S send"));
        assert!(!term.buffer_contains("/ search"));
    }
}
