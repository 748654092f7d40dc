//! Technology tabs with proficiency bars

use codewave_core::catalog::technologies_in;
use codewave_core::{LevelReveal, TechCategory};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::{level_bar, pad, truncate};
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

const NAME_COLUMN: usize = 14;
const PERCENT_COLUMN: usize = 5;

pub struct Technologies<'a> {
    reveal: &'a LevelReveal,
    active: bool,
}

impl<'a> Technologies<'a> {
    pub fn new(reveal: &'a LevelReveal, active: bool) -> Self {
        Self { reveal, active }
    }

    fn tabs(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for category in TechCategory::ALL {
            let style = if category == self.reveal.category() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let bar_width = inner.saturating_sub(NAME_COLUMN + PERCENT_COLUMN + 2).min(40);

        let mut lines = vec![
            Line::styled("Technologies We Master", styles::heading()),
            self.tabs(),
            Line::from(""),
        ];
        for tech in technologies_in(self.reveal.category()) {
            let level = self.reveal.displayed_level(tech);
            lines.push(Line::from(vec![
                Span::styled(
                    pad(&truncate(tech.name, NAME_COLUMN), NAME_COLUMN),
                    styles::text_primary(),
                ),
                Span::raw(" "),
                Span::styled(level_bar(level, bar_width), styles::accent()),
                Span::styled(format!(" {:>3}%", level), styles::text_muted()),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }
}

impl Widget for Technologies<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_section("Technologies", self.active, lines, area, buf);
    }
}

impl PageSection for Technologies<'_> {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}
