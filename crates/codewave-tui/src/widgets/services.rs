//! Services grid, rendered as a stacked list of cards

use codewave_core::catalog::SERVICES;
use codewave_core::ServiceRecord;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::truncate;
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

pub struct Services {
    active: bool,
}

impl Services {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let mut lines = vec![
            Line::styled("Our Services", styles::heading()),
            Line::styled(
                truncate(
                    "Comprehensive development solutions tailored to your business needs",
                    inner,
                ),
                styles::text_secondary(),
            ),
            Line::from(""),
        ];
        for service in SERVICES {
            lines.extend(service_card(service, inner));
        }
        lines
    }
}

fn service_card(service: &ServiceRecord, inner: usize) -> Vec<Line<'static>> {
    vec![
        Line::styled(truncate(service.title, inner), styles::accent_bold()),
        Line::styled(
            truncate(service.description, inner),
            styles::text_secondary(),
        ),
        Line::styled(
            truncate(&format!("✓ {}", service.features.join("  ✓ ")), inner),
            styles::text_primary(),
        ),
        Line::from(vec![Span::styled(
            truncate(&service.tech.join(" · "), inner),
            styles::text_muted(),
        )]),
        Line::from(""),
    ]
}

impl Widget for Services {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_section("Services", self.active, lines, area, buf);
    }
}

impl PageSection for Services {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}
