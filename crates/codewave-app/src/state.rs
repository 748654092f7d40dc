//! Application state (Model in TEA pattern)

use codewave_core::catalog::{HERO_WORDS, PROJECTS, STATS};
use codewave_core::{
    ContactFlow, FilterState, FormField, LevelReveal, PortfolioView, ProgressLoader,
    SectionBounds, SectionId, SectionTracker, StatCounter, WordRotator,
};

use crate::config::Settings;
use crate::timers::TimerGenerations;
use crate::toast::ToastQueue;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Reading the page; keys scroll and trigger section actions
    #[default]
    Browse,
    /// Typing into the portfolio search box
    Search,
    /// Editing the contact form
    Form,
    /// Navigation menu overlay is open
    Menu,
}

/// Where the page sits in the viewport, plus the section geometry the
/// front-end measured on its last layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub scroll: u32,
    pub viewport: u32,
    pub content_height: u32,
    pub bounds: Vec<SectionBounds>,
}

/// Row heights used before the first real layout pass, and by the
/// headless runner which never renders.
const ESTIMATED_HEIGHTS: [(SectionId, u32); 6] = [
    (SectionId::Home, 24),
    (SectionId::Services, 30),
    (SectionId::Portfolio, 40),
    (SectionId::Technologies, 22),
    (SectionId::About, 36),
    (SectionId::Contact, 34),
];

const ESTIMATED_FOOTER: u32 = 6;

impl Default for PageLayout {
    fn default() -> Self {
        Self::estimated(24)
    }
}

impl PageLayout {
    pub fn estimated(viewport: u32) -> Self {
        let mut offset = 0;
        let bounds = ESTIMATED_HEIGHTS
            .iter()
            .map(|&(section, height)| {
                let b = SectionBounds::new(section, offset, height);
                offset += height;
                b
            })
            .collect();
        Self {
            scroll: 0,
            viewport,
            content_height: offset + ESTIMATED_FOOTER,
            bounds,
        }
    }

    pub fn max_scroll(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport)
    }

    /// Move to `row`, clamped to the scrollable range. Returns `true` if the
    /// position changed.
    pub fn set_scroll(&mut self, row: u32) -> bool {
        let row = row.min(self.max_scroll());
        if row == self.scroll {
            return false;
        }
        self.scroll = row;
        true
    }

    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta.unsigned_abs())
        };
        self.set_scroll(target)
    }

    pub fn section_offset(&self, section: SectionId) -> Option<u32> {
        self.bounds
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.offset)
    }

    /// Whether any row of `section` is inside the viewport.
    pub fn is_visible(&self, section: SectionId) -> bool {
        let top = self.scroll;
        let bottom = self.scroll.saturating_add(self.viewport);
        self.bounds
            .iter()
            .filter(|b| b.section == section)
            .any(|b| b.offset < bottom && b.offset.saturating_add(b.height) > top)
    }

    /// Replace geometry after a layout pass, re-clamping the scroll position.
    pub fn update_geometry(&mut self, bounds: Vec<SectionBounds>, content_height: u32) {
        self.bounds = bounds;
        self.content_height = content_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    pub ui_mode: UiMode,

    pub loader: ProgressLoader,

    /// Active nav link and the "scrolled" header style
    pub tracker: SectionTracker,

    /// Highlighted row in the navigation menu
    pub menu_index: usize,

    pub filter: FilterState,

    pub tech: LevelReveal,

    pub hero: WordRotator,

    /// One counter per about-section stat, in catalog order
    pub counters: Vec<StatCounter>,

    pub contact: ContactFlow,

    pub focused_field: FormField,

    pub toasts: ToastQueue,

    pub page: PageLayout,

    pub timers: TimerGenerations,

    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut loader = ProgressLoader::new();
        if !settings.loader.enabled {
            loader.force_finish();
        }

        let mut tech = LevelReveal::default();
        tech.select(settings.animation.initial_tech_category);

        let counters = STATS
            .iter()
            .map(|s| StatCounter::new(s.value, settings.animation.counter_steps))
            .collect();

        Self {
            ui_mode: UiMode::Browse,
            loader,
            tracker: SectionTracker::new(
                settings.navigation.lookahead,
                settings.navigation.scrolled_threshold,
            ),
            menu_index: 0,
            filter: FilterState {
                category: settings.portfolio.initial_category,
                search: String::new(),
            },
            tech,
            hero: WordRotator::new(HERO_WORDS),
            counters,
            contact: ContactFlow::new(),
            focused_field: FormField::Name,
            toasts: ToastQueue::new(settings.ui.max_toasts),
            page: PageLayout::default(),
            timers: TimerGenerations::default(),
            quit: false,
            settings,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn menu_open(&self) -> bool {
        self.ui_mode == UiMode::Menu
    }

    /// Project grid for the current filter.
    pub fn portfolio_view(&self) -> PortfolioView<'static> {
        PortfolioView::from_filter(&self.filter, PROJECTS)
    }

    pub fn counters_started(&self) -> bool {
        self.counters.iter().any(|c| c.is_running() || c.is_finished())
    }
}
