//! Simulated progress loader shown over the page on first paint.
//!
//! The loader owns no timers. Its owner calls [`ProgressLoader::tick`] on a
//! fixed interval with a strictly positive increment, enables skipping after a
//! grace period, and calls [`ProgressLoader::dismiss`] after the completion
//! delay that `tick`/`skip` ask for.

use rand::Rng;
use serde::Serialize;

/// Labels lit up along the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoaderStage {
    Initializing,
    LoadingAssets,
    Optimizing,
    Ready,
}

impl LoaderStage {
    pub const ALL: [LoaderStage; 4] = [
        LoaderStage::Initializing,
        LoaderStage::LoadingAssets,
        LoaderStage::Optimizing,
        LoaderStage::Ready,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoaderStage::Initializing => "Initializing",
            LoaderStage::LoadingAssets => "Loading Assets",
            LoaderStage::Optimizing => "Optimizing",
            LoaderStage::Ready => "Ready",
        }
    }

    /// Progress the bar must exceed for this stage to light up.
    pub fn threshold(&self) -> u8 {
        match self {
            LoaderStage::Initializing => 0,
            LoaderStage::LoadingAssets => 25,
            LoaderStage::Optimizing => 50,
            LoaderStage::Ready => 75,
        }
    }

    pub fn is_lit(&self, progress: u8) -> bool {
        progress > self.threshold()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum LoaderPhase {
    Loading,
    /// At 100 and waiting for the dismiss delay.
    Completing { skipped: bool },
    Dismissed,
}

/// What the owner should do after a loader transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStep {
    /// Still loading; keep ticking.
    Continue,
    /// Reached 100 naturally; dismiss after the normal delay.
    Completed,
    /// Skipped by the user; dismiss after the short delay.
    Skipped,
    /// Nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLoader {
    progress: u8,
    phase: LoaderPhase,
    skip_available: bool,
}

impl Default for ProgressLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressLoader {
    pub const MAX: u8 = 100;

    pub fn new() -> Self {
        Self {
            progress: 0,
            phase: LoaderPhase::Loading,
            skip_available: false,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn skip_available(&self) -> bool {
        self.skip_available && self.phase == LoaderPhase::Loading
    }

    pub fn is_visible(&self) -> bool {
        self.phase != LoaderPhase::Dismissed
    }

    /// Progress as a ratio in `0.0..=1.0` for gauges.
    pub fn ratio(&self) -> f64 {
        f64::from(self.progress) / f64::from(Self::MAX)
    }

    pub fn current_stage(&self) -> LoaderStage {
        LoaderStage::ALL
            .into_iter()
            .rev()
            .find(|s| s.is_lit(self.progress))
            .unwrap_or(LoaderStage::Initializing)
    }

    /// Advance by `increment` (at least 1), clamping at 100.
    pub fn tick(&mut self, increment: u8) -> LoaderStep {
        if self.phase != LoaderPhase::Loading {
            return LoaderStep::Ignored;
        }
        self.progress = self
            .progress
            .saturating_add(increment.max(1))
            .min(Self::MAX);
        if self.progress == Self::MAX {
            self.phase = LoaderPhase::Completing { skipped: false };
            LoaderStep::Completed
        } else {
            LoaderStep::Continue
        }
    }

    /// Called once the grace period has elapsed.
    pub fn enable_skip(&mut self) -> bool {
        if self.phase != LoaderPhase::Loading || self.skip_available {
            return false;
        }
        self.skip_available = true;
        true
    }

    /// Jump straight to 100. Only honoured once skipping is enabled.
    pub fn skip(&mut self) -> LoaderStep {
        if !self.skip_available() {
            return LoaderStep::Ignored;
        }
        self.progress = Self::MAX;
        self.phase = LoaderPhase::Completing { skipped: true };
        LoaderStep::Skipped
    }

    /// Hide the overlay after the completion delay.
    pub fn dismiss(&mut self) -> bool {
        if !matches!(self.phase, LoaderPhase::Completing { .. }) {
            return false;
        }
        self.phase = LoaderPhase::Dismissed;
        true
    }

    /// Page-ready ceiling: complete and hide immediately, whatever the counter says.
    pub fn force_finish(&mut self) -> bool {
        if self.phase == LoaderPhase::Dismissed {
            return false;
        }
        self.progress = Self::MAX;
        self.phase = LoaderPhase::Dismissed;
        true
    }
}

/// Draw a loader increment from `[min, max)`, never below 1.
pub fn random_increment<R: Rng + ?Sized>(rng: &mut R, min: u8, max: u8) -> u8 {
    let min = min.max(1);
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}
