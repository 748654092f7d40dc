//! Configuration types for CodeWave
//!
//! Every delay is in milliseconds. Navigation distances are in terminal rows.

use codewave_core::{CategoryFilter, TechCategory};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (.codewave/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub loader: LoaderSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub portfolio: PortfolioSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub animation: AnimationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Premium loader overlay
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoaderSettings {
    /// Show the loader at startup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Interval between progress increments
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Smallest increment per tick (inclusive)
    #[serde(default = "default_min_increment")]
    pub min_increment: u8,

    /// Largest increment per tick (exclusive)
    #[serde(default = "default_max_increment")]
    pub max_increment: u8,

    /// Grace period before the skip control appears
    #[serde(default = "default_skip_after_ms")]
    pub skip_after_ms: u64,

    /// Delay between reaching 100% and hiding the overlay
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,

    /// Delay between a skip and hiding the overlay
    #[serde(default = "default_skip_dismiss_ms")]
    pub skip_dismiss_ms: u64,

    /// Hard ceiling after which the page replaces the loader
    #[serde(default = "default_page_ready_ms")]
    pub page_ready_ms: u64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_ms: default_tick_ms(),
            min_increment: default_min_increment(),
            max_increment: default_max_increment(),
            skip_after_ms: default_skip_after_ms(),
            dismiss_ms: default_dismiss_ms(),
            skip_dismiss_ms: default_skip_dismiss_ms(),
            page_ready_ms: default_page_ready_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    200
}

fn default_min_increment() -> u8 {
    5
}

fn default_max_increment() -> u8 {
    20
}

fn default_skip_after_ms() -> u64 {
    1000
}

fn default_dismiss_ms() -> u64 {
    500
}

fn default_skip_dismiss_ms() -> u64 {
    300
}

fn default_page_ready_ms() -> u64 {
    3000
}

/// Contact form submission
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactSettings {
    /// Artificial latency of the simulated transport
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the success state is shown before the form resets
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Give up on a submission after this long
    #[serde(default = "default_submit_timeout_ms")]
    pub timeout_ms: u64,

    /// Make the simulated transport fail, to preview the error path
    #[serde(default)]
    pub simulate_failure: bool,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            timeout_ms: default_submit_timeout_ms(),
            simulate_failure: false,
        }
    }
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_reset_delay_ms() -> u64 {
    3000
}

fn default_submit_timeout_ms() -> u64 {
    10_000
}

/// Portfolio grid
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PortfolioSettings {
    /// Category chip selected at startup
    #[serde(default)]
    pub initial_category: CategoryFilter,

    /// Tags shown per card before the `+N` badge
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            initial_category: CategoryFilter::All,
            max_tags: default_max_tags(),
        }
    }
}

fn default_max_tags() -> usize {
    3
}

/// Scrolling and the active-section tracker
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Probe distance below the scroll position
    #[serde(default = "default_lookahead")]
    pub lookahead: u32,

    /// Scroll distance after which the header turns solid
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u32,

    /// Rows moved per scroll step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            lookahead: default_lookahead(),
            scrolled_threshold: default_scrolled_threshold(),
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_lookahead() -> u32 {
    3
}

fn default_scrolled_threshold() -> u32 {
    2
}

fn default_scroll_step() -> u32 {
    1
}

/// Decorative animations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationSettings {
    #[serde(default = "default_hero_rotate_ms")]
    pub hero_rotate_ms: u64,

    /// Total duration of a stat counter run
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u64,

    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,

    /// Delay before technology bars grow after a tab switch
    #[serde(default = "default_tech_reveal_ms")]
    pub tech_reveal_ms: u64,

    /// Technology tab selected at startup
    #[serde(default)]
    pub initial_tech_category: TechCategory,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            hero_rotate_ms: default_hero_rotate_ms(),
            counter_duration_ms: default_counter_duration_ms(),
            counter_steps: default_counter_steps(),
            tech_reveal_ms: default_tech_reveal_ms(),
            initial_tech_category: TechCategory::Frontend,
        }
    }
}

impl AnimationSettings {
    /// Interval between two counter steps.
    pub fn counter_step(&self) -> Duration {
        let steps = u64::from(self.counter_steps.max(1));
        Duration::from_millis((self.counter_duration_ms / steps).max(1))
    }
}

fn default_hero_rotate_ms() -> u64 {
    2000
}

fn default_counter_duration_ms() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

fn default_tech_reveal_ms() -> u64 {
    100
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,

    /// Older toasts are dropped beyond this many
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_ttl_ms: default_toast_ttl_ms(),
            max_toasts: default_max_toasts(),
        }
    }
}

fn default_toast_ttl_ms() -> u64 {
    4000
}

fn default_max_toasts() -> usize {
    3
}

fn default_true() -> bool {
    true
}
