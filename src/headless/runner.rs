//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin, feeds them through the engine and prints every
//! resulting engine event as NDJSON.

use std::path::Path;

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use codewave_app::config::Settings;
use codewave_app::{message::Message, Engine, EngineEvent};
use codewave_core::prelude::*;
use codewave_core::{CategoryFilter, FormField, SectionId, TechCategory};

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(project_path: &Path, settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("CodeWave starting in HEADLESS mode");
    info!("Project: {}", project_path.display());
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::with_settings(project_path.to_path_buf(), settings);
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    HeadlessEvent::started(&project_path.display().to_string()).emit();
    engine.start();
    emit_pending(&mut events);

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown().await;
    emit_pending(&mut events);

    info!("CodeWave headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        engine.process_next().await;
        emit_pending(events);
    }

    Ok(())
}

/// Print every event the engine broadcast since the last call
fn emit_pending(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from_engine(&event).emit(),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output fell behind, {} events dropped", skipped);
                HeadlessEvent::error(format!("{} events dropped", skipped), false).emit();
            }
            Err(_) => break,
        }
    }
}

/// Translate one stdin line into an engine message.
///
/// Returns `None` for blank lines and anything unrecognised.
fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => None,
        "q" | "quit" => Some(Message::Quit),
        "skip" => Some(Message::SkipLoader),
        "category" => CategoryFilter::from_id(rest).map(Message::SelectCategory),
        "search" => Some(Message::SetSearch(rest.to_string())),
        "clear" => Some(Message::ClearFilters),
        "more" => Some(Message::LoadMore),
        "tech" => TechCategory::from_id(rest).map(Message::SelectTechCategory),
        "section" => SectionId::from_id(rest).map(Message::JumpToSection),
        "scroll" => rest.parse().ok().map(Message::ScrollBy),
        "goto" => rest.parse().ok().map(Message::ScrollTo),
        "focus" => FormField::from_key(rest).map(Message::FocusField),
        "field" => {
            let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            FormField::from_key(key).map(|field| Message::SetField {
                field,
                value: value.trim().replace("\\n", "\n"),
            })
        }
        "submit" => Some(Message::SubmitContact),
        "dismiss" => rest.parse().ok().map(Message::DismissToast),
        _ => None,
    }
}

/// Spawn stdin reader task that sends commands to message channel (blocking version)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match parse_command(trimmed) {
                    Some(msg) => {
                        let quit = matches!(msg, Message::Quit);
                        info!("Stdin: {}", trimmed);
                        if msg_tx.blocking_send(msg).is_err() || quit {
                            break;
                        }
                    }
                    None => {
                        warn!("Unknown stdin command: {}", trimmed);
                        HeadlessEvent::error(format!("Unknown command: {}", trimmed), false).emit();
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
