//! CodeWave Library
//!
//! Entry points shared by the `codewave` binary: the terminal page and the
//! headless NDJSON runner. Both load settings the same way and then hand
//! off to an `Engine`.

pub mod headless;

use std::path::Path;

use codewave_app::config::{self, Settings};
use codewave_core::prelude::*;

/// Options the command line can override on top of `config.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    /// Start with the page already shown
    pub skip_loader: bool,
    /// Make the simulated transport reject every submission
    pub simulate_failure: bool,
}

/// Load `<project>/.codewave/config.toml` and apply command-line overrides.
pub fn resolve_settings(project_path: &Path, options: LaunchOptions) -> Settings {
    let mut settings = config::load_settings(project_path);
    if options.skip_loader {
        settings.loader.enabled = false;
    }
    if options.simulate_failure {
        settings.contact.simulate_failure = true;
    }
    settings
}

/// Run the terminal page for a project directory
pub async fn run_with_project(project_path: &Path, options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    codewave_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("CodeWave starting");
    info!("Project: {}", project_path.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = resolve_settings(project_path, options);
    let result = codewave_tui::run_with_project(project_path, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("CodeWave exiting");
    result
}

/// Run without a terminal UI, printing NDJSON events to stdout
pub async fn run_headless(project_path: &Path, options: LaunchOptions) -> Result<()> {
    codewave_core::logging::init()?;

    let settings = resolve_settings(project_path, options);
    let result = headless::runner::run_headless(project_path, settings).await;

    if let Err(ref e) = result {
        headless::HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let dir = tempdir().unwrap();
        let settings = resolve_settings(
            dir.path(),
            LaunchOptions {
                skip_loader: true,
                simulate_failure: true,
            },
        );
        assert!(!settings.loader.enabled);
        assert!(settings.contact.simulate_failure);
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".codewave")).unwrap();
        std::fs::write(
            dir.path().join(".codewave/config.toml"),
            "[loader]\nenabled = false\n",
        )
        .unwrap();

        let settings = resolve_settings(dir.path(), LaunchOptions::default());
        assert!(!settings.loader.enabled);
        assert!(!settings.contact.simulate_failure);
    }
}
