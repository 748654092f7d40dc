//! Portfolio filtering: a category selector plus free-text search over the
//! project catalog.
//!
//! [`filter_projects`] is pure. It never touches the records it is given,
//! keeps catalog order, and applying it twice with the same inputs yields the
//! same subset.

use serde::{Deserialize, Serialize};

use crate::types::{ProjectCategory, ProjectRecord};

/// Category chip selected above the project grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Web,
    Mobile,
    Featured,
}

impl CategoryFilter {
    /// Chip order, left to right.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Web,
        CategoryFilter::Mobile,
        CategoryFilter::Featured,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Web => "Web Development",
            CategoryFilter::Mobile => "Mobile Apps",
            CategoryFilter::Featured => "Featured",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Web => "web",
            CategoryFilter::Mobile => "mobile",
            CategoryFilter::Featured => "featured",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id.trim()))
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Category predicate for a single record.
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Featured => project.featured,
            CategoryFilter::Web => project.category == ProjectCategory::Web,
            CategoryFilter::Mobile => project.category == ProjectCategory::Mobile,
        }
    }
}

/// Search predicate for a single record.
///
/// An empty term matches everything. Otherwise the lower-cased term must be a
/// substring of the lower-cased title, description, or any tag.
pub fn matches_search(project: &ProjectRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Reduce `records` to those matching both the category and the search term.
///
/// Accepts any iterator of record references so an already filtered list can
/// be fed back in.
pub fn filter_projects<'a, I>(
    records: I,
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    records
        .into_iter()
        .filter(|p| category.matches(p) && matches_search(p, search))
        .collect()
}

/// Filter selection owned by the portfolio view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
}

impl FilterState {
    pub fn apply<'a>(&self, catalog: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter_projects(catalog, self.category, &self.search)
    }

    /// Back to `All` with an empty search box.
    pub fn clear(&mut self) {
        self.category = CategoryFilter::All;
        self.search.clear();
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.is_empty()
    }
}

/// What the project grid should show for a given filter result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioView<'a> {
    Results {
        projects: Vec<&'a ProjectRecord>,
        /// "Load more" is offered only while some projects are hidden.
        show_load_more: bool,
    },
    /// Nothing matched; the view offers a "Clear filters" action.
    NoResults,
}

impl<'a> PortfolioView<'a> {
    pub fn from_filter(filter: &FilterState, catalog: &'a [ProjectRecord]) -> Self {
        let projects = filter.apply(catalog);
        if projects.is_empty() {
            return PortfolioView::NoResults;
        }
        let show_load_more = show_load_more(projects.len(), catalog.len());
        PortfolioView::Results {
            projects,
            show_load_more,
        }
    }

    pub fn projects(&self) -> &[&'a ProjectRecord] {
        match self {
            PortfolioView::Results { projects, .. } => projects,
            PortfolioView::NoResults => &[],
        }
    }
}

pub fn show_load_more(visible: usize, total: usize) -> bool {
    visible > 0 && visible < total
}

/// Number of catalog records behind each chip.
pub fn category_counts(catalog: &[ProjectRecord]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::ALL
        .into_iter()
        .map(|c| (c, catalog.iter().filter(|p| c.matches(p)).count()))
        .collect()
}

/// Split tags into the ones shown on a card and the size of the `+N` overflow.
pub fn visible_tags<'t>(tags: &'t [&'static str], max: usize) -> (&'t [&'static str], usize) {
    let shown = tags.len().min(max);
    (&tags[..shown], tags.len() - shown)
}

/// Format a metric with thousands separators, e.g. `12,500`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
