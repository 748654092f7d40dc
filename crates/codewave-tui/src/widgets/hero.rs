//! Hero banner with the rotating headline word

use codewave_core::WordRotator;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::{truncate, wrap};
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

const BADGE: &str = "✦ Welcome to the Future of Development";
const PITCH: &str = "Transform your ideas into powerful digital experiences with our premium \
full-stack development services. We craft exceptional web and mobile applications that drive results.";

pub struct Hero<'a> {
    rotator: &'a WordRotator,
    active: bool,
}

impl<'a> Hero<'a> {
    pub fn new(rotator: &'a WordRotator, active: bool) -> Self {
        Self { rotator, active }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let mut lines = vec![
            Line::from(""),
            Line::styled(truncate(BADGE, inner), styles::accent()),
            Line::from(""),
            Line::styled("Building", styles::heading()),
            Line::styled(
                truncate(self.rotator.current(), inner),
                styles::gradient_word(),
            ),
            Line::styled("Solutions", styles::heading()),
            Line::from(""),
        ];
        lines.extend(
            wrap(PITCH, inner)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_secondary())),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[ Start Your Project ", styles::accent_bold()),
            Span::styled("f", styles::keybinding()),
            Span::styled(" ]", styles::accent_bold()),
            Span::raw("  "),
            Span::styled("[ View Portfolio ", styles::text_primary()),
            Span::styled("3", styles::keybinding()),
            Span::styled(" ]", styles::text_primary()),
        ]));
        lines.push(Line::from(""));
        lines
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_section("Home", self.active, lines, area, buf);
    }
}

impl PageSection for Hero<'_> {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use codewave_core::catalog::HERO_WORDS;

    #[test]
    fn test_hero_shows_current_word() {
        let mut rotator = WordRotator::new(HERO_WORDS);
        rotator.advance();

        let hero = Hero::new(&rotator, true);
        let height = hero.height(80);
        let mut term = TestTerminal::with_size(80, height);
        term.render_widget(hero, term.area());

        assert!(term.buffer_contains("Welcome to the Future of Development"));
        assert!(term.buffer_contains(HERO_WORDS[1]));
        assert!(term.buffer_contains("Start Your Project"));
    }

    #[test]
    fn test_narrow_hero_grows_taller() {
        let rotator = WordRotator::new(HERO_WORDS);
        let hero = Hero::new(&rotator, false);
        assert!(hero.height(40) > hero.height(120));
    }
}
