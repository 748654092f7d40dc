//! Main TUI runner - entry point and event loop

use std::path::Path;

use codewave_app::config::Settings;
use codewave_app::message::Message;
use codewave_app::Engine;
use codewave_core::prelude::*;

use crate::render::PageGeometry;
use crate::{event, render, terminal};

/// Run the terminal page for `project_path` with already-loaded settings
pub async fn run_with_project(project_path: &Path, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Loaded settings: loader={}, simulate_failure={}",
        settings.loader.enabled, settings.contact.simulate_failure
    );

    let mut term = ratatui::init();

    let mut engine = Engine::with_settings(project_path.to_path_buf(), settings);
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timers, submission results and signals
        engine.drain_pending_messages();

        let mut geometry = None;
        terminal
            .draw(|frame| geometry = Some(render::view(frame, &engine.state)))
            .context("drawing frame")?;
        if let Some(geometry) = geometry {
            sync_geometry(engine, geometry);
        }

        if let Some(message) = event::poll().context("polling terminal input")? {
            engine.process_message(message);
        }
    }
    Ok(())
}

/// Feed the measured layout back so scrolling and section tracking use
/// real row counts instead of the estimate.
fn sync_geometry(engine: &mut Engine, geometry: PageGeometry) {
    if engine.state.page.viewport != geometry.viewport {
        debug!("Viewport resized to {} rows", geometry.viewport);
        engine.process_message(Message::ViewportResized {
            height: geometry.viewport,
        });
    }
    if engine.state.page.bounds != geometry.bounds
        || engine.state.page.content_height != geometry.content_height
    {
        engine.process_message(Message::LayoutMeasured {
            bounds: geometry.bounds,
            content_height: geometry.content_height,
        });
    }
}
