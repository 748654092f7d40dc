//! Settings parser for .codewave/config.toml

use super::types::Settings;
use codewave_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CODEWAVE_DIR: &str = ".codewave";

/// Path of the settings file for a project directory.
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(CODEWAVE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.codewave/config.toml`.
///
/// A missing or malformed file is not an error: defaults are used and the
/// problem is logged.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse and sanity-check settings text.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))?;

    if settings.loader.tick_ms == 0 {
        return Err(Error::config_invalid("loader.tick_ms must be greater than 0"));
    }
    if settings.loader.max_increment < settings.loader.min_increment {
        return Err(Error::config_invalid(
            "loader.max_increment must not be below loader.min_increment",
        ));
    }
    if settings.animation.hero_rotate_ms == 0 {
        return Err(Error::config_invalid(
            "animation.hero_rotate_ms must be greater than 0",
        ));
    }

    Ok(settings)
}

/// Create `.codewave/config.toml` with commented defaults if it is missing.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let codewave_dir = project_path.join(CODEWAVE_DIR);

    if !codewave_dir.exists() {
        std::fs::create_dir_all(&codewave_dir)
            .map_err(|e| Error::config(format!("Failed to create .codewave dir: {}", e)))?;
        info!("Created .codewave directory");
    }

    let config_path = codewave_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(config_path)
}

fn generate_default_config() -> &'static str {
    r#"# CodeWave Configuration
# All durations are in milliseconds.

[loader]
enabled = true
tick_ms = 200
min_increment = 5       # inclusive
max_increment = 20      # exclusive
skip_after_ms = 1000    # skip button appears after this long
dismiss_ms = 500
skip_dismiss_ms = 300
page_ready_ms = 3000    # page replaces the loader no matter what

[contact]
submit_delay_ms = 2000
reset_delay_ms = 3000
timeout_ms = 10000
simulate_failure = false

[portfolio]
initial_category = "all"    # all | web | mobile | featured
max_tags = 3

[navigation]
lookahead = 3               # rows below the scroll position
scrolled_threshold = 2
scroll_step = 1

[animation]
hero_rotate_ms = 2000
counter_duration_ms = 2000
counter_steps = 60
tech_reveal_ms = 100
initial_tech_category = "frontend"  # frontend | backend | mobile | devops

[ui]
toast_ttl_ms = 4000
max_toasts = 3
"#
}
