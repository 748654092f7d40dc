//! codewave-tui - Terminal UI for CodeWave
//!
//! This crate renders the landing page with ratatui. It creates an Engine
//! from codewave-app and adds terminal rendering, event polling, and the
//! page widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run_with_project;
