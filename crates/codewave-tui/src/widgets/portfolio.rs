//! Portfolio section: category chips, search box and project cards

use codewave_core::catalog::PROJECTS;
use codewave_core::{
    category_counts, format_count, visible_tags, FilterState, PortfolioView, ProjectRecord,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::text::truncate;
use super::{framed_height, inner_width, render_section, PageSection};
use crate::theme::styles;

pub struct Portfolio<'a> {
    filter: &'a FilterState,
    view: &'a PortfolioView<'static>,
    max_tags: usize,
    searching: bool,
    active: bool,
}

impl<'a> Portfolio<'a> {
    pub fn new(filter: &'a FilterState, view: &'a PortfolioView<'static>, max_tags: usize) -> Self {
        Self {
            filter,
            view,
            max_tags,
            searching: false,
            active: false,
        }
    }

    /// Show the search box with a live cursor
    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn chips(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (category, count) in category_counts(PROJECTS) {
            let label = format!(" {} {} ", category.label(), count);
            let style = if category == self.filter.category {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn search_line(&self, inner: usize) -> Line<'static> {
        if self.searching {
            Line::from(vec![
                Span::styled("⌕ ", styles::accent()),
                Span::styled(
                    truncate(&self.filter.search, inner.saturating_sub(3)),
                    styles::text_primary(),
                ),
                Span::styled("▏", styles::accent()),
            ])
        } else if self.filter.search.is_empty() {
            Line::from(vec![
                Span::styled("⌕ Search projects... ", styles::text_muted()),
                Span::styled("/", styles::keybinding()),
            ])
        } else {
            Line::from(vec![
                Span::styled("⌕ ", styles::text_muted()),
                Span::styled(
                    truncate(&self.filter.search, inner.saturating_sub(2)),
                    styles::text_primary(),
                ),
            ])
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = inner_width(width);
        let mut lines = vec![
            Line::styled("Our Portfolio", styles::heading()),
            self.chips(),
            self.search_line(inner),
            Line::from(""),
        ];

        match self.view {
            PortfolioView::Results {
                projects,
                show_load_more,
            } => {
                for project in projects {
                    lines.extend(project_card(project, inner, self.max_tags));
                }
                if *show_load_more {
                    lines.push(Line::from(vec![
                        Span::styled("[ Load More Projects ", styles::accent_bold()),
                        Span::styled("l", styles::keybinding()),
                        Span::styled(" ]", styles::accent_bold()),
                    ]));
                }
            }
            PortfolioView::NoResults => {
                lines.push(Line::styled(
                    "No projects found matching your criteria.",
                    styles::text_secondary(),
                ));
                lines.push(Line::from(vec![
                    Span::styled("[ Clear Filters ", styles::accent_bold()),
                    Span::styled("x", styles::keybinding()),
                    Span::styled(" ]", styles::accent_bold()),
                ]));
            }
        }
        lines
    }
}

fn project_card(project: &ProjectRecord, inner: usize, max_tags: usize) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(project.title, styles::accent_bold())];
    if project.featured {
        title.push(Span::styled("  ★ Featured", styles::keybinding()));
    }
    title.push(Span::styled(
        format!("  {} · {}", project.client, project.date),
        styles::text_muted(),
    ));

    let (tags, overflow) = visible_tags(project.tags, max_tags);
    let mut tag_text = tags.join(" · ");
    if overflow > 0 {
        tag_text.push_str(&format!(" +{}", overflow));
    }

    let metrics = format!(
        "views {}  likes {}  comments {}",
        format_count(project.metrics.views),
        format_count(project.metrics.likes),
        format_count(project.metrics.comments),
    );

    vec![
        Line::from(title),
        Line::styled(
            truncate(project.description, inner),
            styles::text_secondary(),
        ),
        Line::styled(truncate(&tag_text, inner), styles::accent()),
        Line::styled(truncate(&metrics, inner), styles::text_muted()),
        Line::from(""),
    ]
}

impl Widget for Portfolio<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        render_section("Portfolio", self.active, lines, area, buf);
    }
}

impl PageSection for Portfolio<'_> {
    fn height(&self, width: u16) -> u16 {
        framed_height(self.lines(width).len())
    }
}
