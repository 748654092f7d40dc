//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `loader`: Loader overlay lifecycle
//! - `navigation`: Scrolling, section jumps and the nav menu
//! - `portfolio`: Category chips, search and load-more
//! - `showcase`: Hero rotation, technology tabs and stat counters
//! - `contact`: Contact form editing and submission
//! - `helpers`: Timer and toast helpers

pub(crate) mod contact;
pub(crate) mod helpers;
pub(crate) mod keys;
pub(crate) mod loader;
pub(crate) mod navigation;
pub(crate) mod portfolio;
pub(crate) mod showcase;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use codewave_core::ContactForm;

use crate::message::Message;
use crate::timers::{TimerKind, TimerSpec};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Start (or restart) a timer
    ScheduleTimer(TimerSpec),

    /// Abort a running timer task
    CancelTimer(TimerKind),

    /// Hand the form snapshot to the submission transport
    SubmitContact { form: ContactForm },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
