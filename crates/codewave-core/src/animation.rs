//! Small step-driven animations: the about-section stat counters, the hero
//! word rotator and the technology level reveal.

use crate::types::{TechCategory, TechnologyRecord};

/// Counts from 0 up to a target in a fixed number of equal steps.
///
/// Intermediate values are floored; the final step lands exactly on the
/// target. A counter animates once and then stays at its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    target: u32,
    steps: u32,
    step: u32,
    started: bool,
}

impl StatCounter {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
            started: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Begin animating. Returns `false` if this counter has already run.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one step. Returns `true` once the target is reached.
    pub fn advance(&mut self) -> bool {
        if self.started && self.step < self.steps {
            self.step += 1;
        }
        self.is_finished()
    }

    pub fn value(&self) -> u32 {
        if self.is_finished() {
            return self.target;
        }
        (u64::from(self.target) * u64::from(self.step) / u64::from(self.steps)) as u32
    }
}

/// Cycles through a fixed word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotator {
    words: &'static [&'static str],
    index: usize,
}

impl WordRotator {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or_default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> &'static str {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.current()
    }
}

/// Technology showcase tab and its bar animation.
///
/// Switching tabs drops every bar to zero; [`LevelReveal::reveal`] (called
/// after a short delay) lets them grow to their real level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelReveal {
    category: TechCategory,
    revealed: bool,
}

impl LevelReveal {
    pub fn category(&self) -> TechCategory {
        self.category
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` when the category actually changed.
    pub fn select(&mut self, category: TechCategory) -> bool {
        if category == self.category && self.revealed {
            return false;
        }
        self.category = category;
        self.revealed = false;
        true
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn displayed_level(&self, tech: &TechnologyRecord) -> u8 {
        if self.revealed && tech.category == self.category {
            tech.level.min(100)
        } else {
            0
        }
    }
}
