//! Configuration file parsing for CodeWave
//!
//! Supports `.codewave/config.toml` in the working directory.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, parse_settings};
pub use types::*;
