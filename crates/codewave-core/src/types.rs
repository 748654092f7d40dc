//! # Catalog Record Types
//!
//! Immutable records describing the agency's portfolio, services, technology
//! stack and company profile. Every record is `'static` data defined in
//! [`crate::catalog`]; nothing in the application mutates them.

use serde::{Deserialize, Serialize};

// ── Projects ─────────────────────────────────────────────────────────────────

/// Platform a portfolio project was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Web,
    Mobile,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
        }
    }
}

/// Engagement counters shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectMetrics {
    pub views: u32,
    pub likes: u32,
    pub comments: u32,
}

/// Outbound links for a project. `None` renders as a disabled button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub live: Option<&'static str>,
    pub source: Option<&'static str>,
}

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    /// Technologies used, shown as tags and included in search.
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub metrics: ProjectMetrics,
    /// Delivery month, `YYYY-MM`.
    pub date: &'static str,
    pub client: &'static str,
    pub links: ProjectLinks,
}

// ── Services ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
}

// ── Technologies ─────────────────────────────────────────────────────────────

/// Grouping used by the technology showcase tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechCategory {
    #[default]
    Frontend,
    Backend,
    Mobile,
    #[serde(rename = "devops")]
    DevOps,
}

impl TechCategory {
    pub const ALL: [TechCategory; 4] = [
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Mobile,
        TechCategory::DevOps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Mobile => "Mobile",
            TechCategory::DevOps => "DevOps",
        }
    }

    /// Stable identifier used in commands and URLs.
    pub fn id(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Mobile => "mobile",
            TechCategory::DevOps => "devops",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyRecord {
    pub name: &'static str,
    /// Proficiency, `0..=100`.
    pub level: u8,
    pub category: TechCategory,
}

// ── Company profile ──────────────────────────────────────────────────────────

/// A headline number in the about section, animated by a stat counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRecord {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneRecord {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
}

/// A way to reach the agency, listed beside the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_category_cycles() {
        assert_eq!(TechCategory::Frontend.next(), TechCategory::Backend);
        assert_eq!(TechCategory::DevOps.next(), TechCategory::Frontend);
        assert_eq!(TechCategory::Frontend.prev(), TechCategory::DevOps);
    }

    #[test]
    fn test_tech_category_from_id() {
        assert_eq!(TechCategory::from_id("devops"), Some(TechCategory::DevOps));
        assert_eq!(TechCategory::from_id(" Mobile "), Some(TechCategory::Mobile));
        assert_eq!(TechCategory::from_id("cloud"), None);
    }

    #[test]
    fn test_tech_category_serializes_as_id() {
        let json = serde_json::to_string(&TechCategory::DevOps).unwrap();
        assert_eq!(json, "\"devops\"");
    }
}
