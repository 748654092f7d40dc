//! Active-section tracking for the navigation bar.
//!
//! On every scroll the tracker probes a point `lookahead` units below the
//! scroll position and picks the first section whose `[offset, offset + height)`
//! range contains it. Units are whatever the front-end measures in: CSS pixels
//! in the browser, rows in the terminal.

use serde::Serialize;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Home,
    Services,
    Portfolio,
    Technologies,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Technologies,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Anchor id, also used by `#anchor` links.
    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Technologies => "technologies",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Portfolio",
            SectionId::Technologies => "Technologies",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.id().eq_ignore_ascii_case(id))
    }

    /// Position in [`SectionId::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Measured extent of one section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionBounds {
    pub section: SectionId,
    pub offset: u32,
    pub height: u32,
}

impl SectionBounds {
    pub fn new(section: SectionId, offset: u32, height: u32) -> Self {
        Self {
            section,
            offset,
            height,
        }
    }

    pub fn contains(&self, position: u32) -> bool {
        position >= self.offset && position < self.offset.saturating_add(self.height)
    }
}

/// First section, in the given order, that contains `position`.
pub fn locate(position: u32, bounds: &[SectionBounds]) -> Option<SectionId> {
    bounds.iter().find(|b| b.contains(position)).map(|b| b.section)
}

/// Holds the currently highlighted section plus the "scrolled" header flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    active: SectionId,
    scrolled: bool,
    lookahead: u32,
    scrolled_threshold: u32,
}

impl SectionTracker {
    pub fn new(lookahead: u32, scrolled_threshold: u32) -> Self {
        Self {
            active: SectionId::Home,
            scrolled: false,
            lookahead,
            scrolled_threshold,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// True once the page has scrolled past the threshold.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Recompute state for a new scroll position.
    ///
    /// Returns `true` when the active section changed. When no section
    /// contains the probe point the previous section stays active.
    pub fn on_scroll(&mut self, scroll: u32, bounds: &[SectionBounds]) -> bool {
        self.scrolled = scroll > self.scrolled_threshold;

        let position = scroll.saturating_add(self.lookahead);
        match locate(position, bounds) {
            Some(section) if section != self.active => {
                tracing::trace!("Active section {:?} -> {:?}", self.active, section);
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(100, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0, 800),
            SectionBounds::new(SectionId::Services, 800, 1200),
            SectionBounds::new(SectionId::Portfolio, 2000, 1500),
            SectionBounds::new(SectionId::Technologies, 3500, 1000),
            SectionBounds::new(SectionId::About, 4500, 1400),
            SectionBounds::new(SectionId::Contact, 5900, 1100),
        ]
    }

    #[test]
    fn test_locate_uses_half_open_ranges() {
        let bounds = page();
        assert_eq!(locate(0, &bounds), Some(SectionId::Home));
        assert_eq!(locate(799, &bounds), Some(SectionId::Home));
        assert_eq!(locate(800, &bounds), Some(SectionId::Services));
        assert_eq!(locate(7000, &bounds), None);
    }

    #[test]
    fn test_locate_first_match_wins_on_overlap() {
        let bounds = vec![
            SectionBounds::new(SectionId::About, 0, 500),
            SectionBounds::new(SectionId::Contact, 100, 500),
        ];
        assert_eq!(locate(200, &bounds), Some(SectionId::About));
    }

    #[test]
    fn test_tracker_applies_lookahead() {
        let mut tracker = SectionTracker::new(100, 50);
        // 750 + 100 lands inside services
        assert!(tracker.on_scroll(750, &page()));
        assert_eq!(tracker.active(), SectionId::Services);
    }

    #[test]
    fn test_tracker_reports_change_only_once() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.on_scroll(3600, &page()));
        assert!(!tracker.on_scroll(3700, &page()));
        assert_eq!(tracker.active(), SectionId::Technologies);
    }

    #[test]
    fn test_tracker_keeps_previous_when_nothing_matches() {
        let mut tracker = SectionTracker::default();
        tracker.on_scroll(6000, &page());
        assert_eq!(tracker.active(), SectionId::Contact);
        assert!(!tracker.on_scroll(9000, &page()));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut tracker = SectionTracker::new(100, 50);
        tracker.on_scroll(50, &page());
        assert!(!tracker.scrolled());
        tracker.on_scroll(51, &page());
        assert!(tracker.scrolled());
        tracker.on_scroll(0, &page());
        assert!(!tracker.scrolled());
    }

    #[test]
    fn test_section_from_id_accepts_anchor() {
        assert_eq!(SectionId::from_id("#contact"), Some(SectionId::Contact));
        assert_eq!(SectionId::from_id("Technologies"), Some(SectionId::Technologies));
        assert_eq!(SectionId::from_id("blog"), None);
    }

    #[test]
    fn test_section_index_matches_order() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
