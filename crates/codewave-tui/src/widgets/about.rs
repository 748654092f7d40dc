//! About section: animated stats, values, milestones and team

use codewave_core::catalog::{MILESTONES, STATS, TEAM, VALUES};
use codewave_core::StatCounter;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::truncate;
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

pub struct About<'a> {
    counters: &'a [StatCounter],
    active: bool,
}

impl<'a> About<'a> {
    pub fn new(counters: &'a [StatCounter], active: bool) -> Self {
        Self { counters, active }
    }

    fn stats(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, stat) in STATS.iter().enumerate() {
            let value = self.counters.get(i).map(StatCounter::value).unwrap_or(0);
            spans.push(Span::styled(
                format!("{}{}", value, stat.suffix),
                styles::gradient_word(),
            ));
            spans.push(Span::styled(
                format!(" {}   ", stat.label),
                styles::text_secondary(),
            ));
        }
        Line::from(spans)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let mut lines = vec![
            Line::styled("About CodeWave", styles::heading()),
            Line::from(""),
            self.stats(),
            Line::from(""),
            Line::styled("Our Values", styles::accent_bold()),
        ];
        for value in VALUES {
            lines.push(Line::from(vec![
                Span::styled(value.title, styles::text_primary()),
                Span::styled(
                    truncate(
                        &format!(" - {}", value.description),
                        inner.saturating_sub(value.title.len()),
                    ),
                    styles::text_muted(),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled("Our Journey", styles::accent_bold()));
        for milestone in MILESTONES {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", milestone.year), styles::keybinding()),
                Span::styled(milestone.title, styles::text_primary()),
                Span::styled(
                    truncate(
                        &format!(" - {}", milestone.description),
                        inner.saturating_sub(milestone.title.len() + 6),
                    ),
                    styles::text_muted(),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::styled("Meet Our Team", styles::accent_bold()));
        for member in TEAM {
            lines.push(Line::from(vec![
                Span::styled(member.name, styles::text_primary()),
                Span::styled(format!(", {}", member.role), styles::accent()),
            ]));
            lines.push(Line::styled(
                truncate(member.bio, inner),
                styles::text_secondary(),
            ));
            lines.push(Line::styled(
                truncate(&member.skills.join(" · "), inner),
                styles::text_muted(),
            ));
        }
        lines.push(Line::from(""));
        lines
    }
}

impl Widget for About<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_section("About", self.active, lines, area, buf);
    }
}

impl PageSection for About<'_> {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}
