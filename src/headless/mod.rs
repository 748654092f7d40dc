//! Headless mode - JSON event output for scripted runs
//!
//! Drives the same engine as the terminal page but, instead of drawing,
//! writes one JSON object per state change to stdout (NDJSON). Commands are
//! read line by line from stdin.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","project":"/srv/site","timestamp":1704700001000}
//! {"event":"loader_progress","progress":14,"timestamp":1704700001150}
//! {"event":"filter_changed","category":"mobile","search":"","visible":3,"timestamp":1704700004000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use codewave_app::{EngineEvent, ToastKind};
use codewave_core::{CategoryFilter, SectionId, SubmissionPhase, TechCategory};
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine created and startup timers armed
    Started { project: String, timestamp: i64 },

    LoaderProgress { progress: u8, timestamp: i64 },

    LoaderDismissed { timestamp: i64 },

    SectionChanged {
        from: SectionId,
        to: SectionId,
        timestamp: i64,
    },

    ScrolledChanged { scrolled: bool, timestamp: i64 },

    FilterChanged {
        category: CategoryFilter,
        search: String,
        visible: usize,
        timestamp: i64,
    },

    TechCategoryChanged {
        category: TechCategory,
        timestamp: i64,
    },

    HeroWordChanged { word: String, timestamp: i64 },

    CountersStarted { timestamp: i64 },

    SubmissionPhaseChanged {
        from: SubmissionPhase,
        to: SubmissionPhase,
        timestamp: i64,
    },

    Toast {
        kind: ToastKind,
        title: String,
        description: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn started(project: &str) -> Self {
        Self::Started {
            project: project.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event into its NDJSON form.
    pub fn from_engine(event: &EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::LoaderProgress { progress } => Self::LoaderProgress {
                progress: *progress,
                timestamp,
            },
            EngineEvent::LoaderDismissed => Self::LoaderDismissed { timestamp },
            EngineEvent::SectionChanged { from, to } => Self::SectionChanged {
                from: *from,
                to: *to,
                timestamp,
            },
            EngineEvent::ScrolledChanged { scrolled } => Self::ScrolledChanged {
                scrolled: *scrolled,
                timestamp,
            },
            EngineEvent::FilterChanged {
                category,
                search,
                visible,
            } => Self::FilterChanged {
                category: *category,
                search: search.clone(),
                visible: *visible,
                timestamp,
            },
            EngineEvent::TechCategoryChanged { category } => Self::TechCategoryChanged {
                category: *category,
                timestamp,
            },
            EngineEvent::HeroWordChanged { word } => Self::HeroWordChanged {
                word: word.to_string(),
                timestamp,
            },
            EngineEvent::CountersStarted => Self::CountersStarted { timestamp },
            EngineEvent::SubmissionPhaseChanged { from, to } => Self::SubmissionPhaseChanged {
                from: *from,
                to: *to,
                timestamp,
            },
            EngineEvent::ToastRaised { toast } => Self::Toast {
                kind: toast.kind,
                title: toast.title.clone(),
                description: toast.description.clone(),
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codewave_app::Toast;

    #[test]
    fn test_started_serialization() {
        let event = HeadlessEvent::started("/srv/site");
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"started""#));
        assert!(json.contains(r#""project":"/srv/site""#));
        assert!(json.contains(r#""timestamp":"#));
    }

    #[test]
    fn test_filter_changed_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::FilterChanged {
            category: CategoryFilter::Mobile,
            search: "fit".into(),
            visible: 1,
        });
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"filter_changed""#));
        assert!(json.contains(r#""category":"mobile""#));
        assert!(json.contains(r#""search":"fit""#));
        assert!(json.contains(r#""visible":1"#));
    }

    #[test]
    fn test_section_changed_uses_snake_case_ids() {
        let event = HeadlessEvent::from_engine(&EngineEvent::SectionChanged {
            from: SectionId::Home,
            to: SectionId::Technologies,
        });
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""from":"home""#));
        assert!(json.contains(r#""to":"technologies""#));
    }

    #[test]
    fn test_submission_phase_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::SubmissionPhaseChanged {
            from: SubmissionPhase::Submitting,
            to: SubmissionPhase::Submitted,
        });
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"submission_phase_changed""#));
        assert!(json.contains(r#""to":"submitted""#));
    }

    #[test]
    fn test_toast_serialization() {
        let event = HeadlessEvent::from_engine(&EngineEvent::ToastRaised {
            toast: Toast {
                id: 1,
                kind: ToastKind::Success,
                title: "Message sent successfully!".into(),
                description: "We'll get back to you within 24 hours.".into(),
            },
        });
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"toast""#));
        assert!(json.contains(r#""kind":"success""#));
        assert!(json.contains("Message sent successfully!"));
    }

    #[test]
    fn test_error_serialization() {
        let event = HeadlessEvent::error("boom".into(), true);
        let json = serde_json::to_string(&event).unwrap();

        assert!(json.contains(r#""event":"error""#));
        assert!(json.contains(r#""fatal":true"#));
    }
}
