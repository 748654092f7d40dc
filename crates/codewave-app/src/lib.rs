//! codewave-app - Application state and orchestration for CodeWave
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction for shared orchestration, configuration loading, timers,
//! and the contact submission transport.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod timers;
pub mod toast;
pub mod transport;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, PageLayout, UiMode};
pub use timers::{TimerKind, TimerSpec};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use transport::{
    LocalSubmissionTransport, SimulatedTransport, SubmissionTransport, TransportError,
};
