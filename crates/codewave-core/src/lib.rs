//! # codewave-core - Core Domain Types
//!
//! Foundation crate for CodeWave. Provides the static content catalog, the
//! portfolio filter, the contact submission state machine, the progress
//! loader, the active-section tracker, and error handling.
//!
//! This crate has **zero internal dependencies** and performs no I/O outside
//! of [`logging`], so the same code drives both the terminal front-end and the
//! browser build (which disables the `logging` feature).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`, `types`)
//! - [`ProjectRecord`], [`ServiceRecord`], [`TechnologyRecord`] - immutable records
//! - [`catalog::PROJECTS`], [`catalog::SERVICES`], [`catalog::TECHNOLOGIES`] - the data
//!
//! ### Portfolio (`portfolio`)
//! - [`filter_projects()`] - Pure, order-preserving category + search filter
//! - [`FilterState`] - Selected category and search term
//! - [`PortfolioView`] - Results or explicit "no results"
//!
//! ### Contact (`contact`)
//! - [`ContactForm`] - Captured field values
//! - [`ContactFlow`] - `Idle → Submitting → Submitted → Idle` state machine
//! - [`FieldError`] - Inline validation messages
//!
//! ### Loader (`loader`)
//! - [`ProgressLoader`] - Monotonic 0..=100 counter with skip and dismiss
//!
//! ### Sections (`sections`)
//! - [`SectionTracker`] - Highlights the section under the scroll position
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use codewave_core::prelude::*;
//! ```

pub mod animation;
pub mod catalog;
pub mod contact;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod loader;
pub mod portfolio;
pub mod sections;
pub mod types;

/// Prelude for common imports used throughout all CodeWave crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use animation::{LevelReveal, StatCounter, WordRotator};
pub use contact::{
    is_valid_email, ContactFlow, ContactForm, FieldError, FieldErrorKind, FieldKind, FormField,
    Receipt, SelectOption, SubmissionPhase, SubmitRejection,
};
pub use error::{Error, Result, ResultExt};
pub use loader::{random_increment, LoaderPhase, LoaderStage, LoaderStep, ProgressLoader};
pub use portfolio::{
    category_counts, filter_projects, format_count, matches_search, show_load_more,
    visible_tags, CategoryFilter, FilterState, PortfolioView,
};
pub use sections::{locate, SectionBounds, SectionId, SectionTracker};
pub use types::{
    ContactChannel, MilestoneRecord, ProjectCategory, ProjectLinks, ProjectMetrics, ProjectRecord,
    ServiceRecord, StatRecord, TeamMember, TechCategory, TechnologyRecord, ValueRecord,
};
