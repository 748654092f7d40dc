//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner serializes them as NDJSON.

use codewave_core::{CategoryFilter, SectionId, SubmissionPhase, TechCategory};

use crate::toast::Toast;

/// Domain events emitted by the Engine for external consumers.
///
/// Events are broadcast after each message processing cycle, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Loader
    // ─────────────────────────────────────────────────────────
    /// Loader progress moved
    LoaderProgress { progress: u8 },

    /// The overlay is gone and the page is interactive
    LoaderDismissed,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// The highlighted nav link changed
    SectionChanged { from: SectionId, to: SectionId },

    /// The header switched between its top-of-page and scrolled styles
    ScrolledChanged { scrolled: bool },

    // ─────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────
    /// Portfolio category or search changed
    FilterChanged {
        category: CategoryFilter,
        search: String,
        visible: usize,
    },

    /// Technology tab changed
    TechCategoryChanged { category: TechCategory },

    /// Hero headline shows a new word
    HeroWordChanged { word: &'static str },

    /// About-section counters began animating
    CountersStarted,

    // ─────────────────────────────────────────────────────────
    // Contact
    // ─────────────────────────────────────────────────────────
    /// Contact submission moved through its cycle
    SubmissionPhaseChanged {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },

    /// A toast appeared
    ToastRaised { toast: Toast },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LoaderProgress { .. } => "loader_progress",
            Self::LoaderDismissed => "loader_dismissed",
            Self::SectionChanged { .. } => "section_changed",
            Self::ScrolledChanged { .. } => "scrolled_changed",
            Self::FilterChanged { .. } => "filter_changed",
            Self::TechCategoryChanged { .. } => "tech_category_changed",
            Self::HeroWordChanged { .. } => "hero_word_changed",
            Self::CountersStarted => "counters_started",
            Self::SubmissionPhaseChanged { .. } => "submission_phase_changed",
            Self::ToastRaised { .. } => "toast_raised",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
        assert_eq!(
            EngineEvent::SectionChanged {
                from: SectionId::Home,
                to: SectionId::Services
            }
            .event_type(),
            "section_changed"
        );
        assert_eq!(
            EngineEvent::LoaderProgress { progress: 40 }.event_type(),
            "loader_progress"
        );
    }

    #[test]
    fn test_events_are_cloneable() {
        let event = EngineEvent::FilterChanged {
            category: CategoryFilter::Web,
            search: "shop".into(),
            visible: 2,
        };
        assert_eq!(event.clone(), event);
    }
}
