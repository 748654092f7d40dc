//! Full-screen loading overlay

use codewave_core::{LoaderStage, ProgressLoader};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::{palette, styles};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 11;

pub struct LoaderOverlay<'a> {
    loader: &'a ProgressLoader,
}

impl<'a> LoaderOverlay<'a> {
    pub fn new(loader: &'a ProgressLoader) -> Self {
        Self { loader }
    }

    fn stages(&self) -> Line<'static> {
        let progress = self.loader.progress();
        let mut spans = Vec::new();
        for (i, stage) in LoaderStage::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            let (dot, style) = if stage.is_lit(progress) {
                ("● ", styles::accent())
            } else {
                ("○ ", styles::text_muted())
            };
            spans.push(Span::styled(dot, style));
            spans.push(Span::styled(stage.label(), style));
        }
        Line::from(spans)
    }
}

impl Widget for LoaderOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::default()
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);

        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = styles::glass_block(true);
        let inner = block.inner(card);
        block.render(card, buf);

        let [brand, tagline, _, gauge, stages, _, skip] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled("CodeWave", styles::gradient_word()))
            .alignment(Alignment::Center)
            .render(brand, buf);
        Paragraph::new(Line::styled(
            "Crafting Digital Excellence",
            styles::text_secondary(),
        ))
        .alignment(Alignment::Center)
        .render(tagline, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::CARD_BG))
            .ratio(self.loader.ratio())
            .label(format!("{}%", self.loader.progress()))
            .render(gauge, buf);

        Paragraph::new(self.stages())
            .alignment(Alignment::Center)
            .render(stages, buf);

        if self.loader.skip_available() {
            Paragraph::new(Line::from(vec![
                Span::styled("Skip to Site ", styles::text_primary()),
                Span::styled("s", styles::keybinding()),
            ]))
            .alignment(Alignment::Center)
            .render(skip, buf);
        }
    }
}
