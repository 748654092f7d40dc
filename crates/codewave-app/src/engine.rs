//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the message channel, timer tasks, shutdown signal,
//! submission transport and settings, so both front-ends drive the page the
//! same way.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use codewave_core::{CategoryFilter, SectionId, SubmissionPhase, TechCategory};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::timers::TimerRegistry;
use crate::transport::{SimulatedTransport, SubmissionTransport};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    progress: u8,
    loader_visible: bool,
    section: SectionId,
    scrolled: bool,
    category: CategoryFilter,
    search: String,
    tech: TechCategory,
    hero_index: usize,
    counters_started: bool,
    phase: SubmissionPhase,
    last_toast_id: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            progress: state.loader.progress(),
            loader_visible: state.loader.is_visible(),
            section: state.tracker.active(),
            scrolled: state.tracker.scrolled(),
            category: state.filter.category,
            search: state.filter.search.clone(),
            tech: state.tech.category(),
            hero_index: state.hero.index(),
            counters_started: state.counters_started(),
            phase: state.contact.phase(),
            last_toast_id: state.toasts.last_issued(),
        }
    }
}

/// Orchestration engine for the CodeWave page.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Timer tasks
/// - Shutdown signaling
/// - Contact submission transport
/// - Event broadcasting for external consumers
pub struct Engine<T = SimulatedTransport> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Flipped to `true` by [`Engine::shutdown`].
    shutdown_tx: watch::Sender<bool>,

    /// Kept so the channel stays open; background tasks get clones.
    shutdown_rx: watch::Receiver<bool>,

    /// OS signal listener; ends once `shutdown_tx` flips.
    signal_task: Option<JoinHandle<()>>,

    /// Working directory the config was loaded from
    pub project_path: PathBuf,

    timers: TimerRegistry,

    transport: Arc<T>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<SimulatedTransport> {
    /// Create an Engine with settings from `<project>/.codewave/config.toml`
    /// and the simulated submission transport.
    pub fn new(project_path: PathBuf) -> Self {
        let settings = config::load_settings(&project_path);
        Self::with_settings(project_path, settings)
    }

    pub fn with_settings(project_path: PathBuf, settings: Settings) -> Self {
        let transport = SimulatedTransport::from_settings(&settings.contact);
        Self::with_transport(project_path, settings, transport)
    }
}

impl<T> Engine<T>
where
    T: SubmissionTransport + Sync + 'static,
{
    /// Create an Engine with an explicit submission transport.
    ///
    /// Creates the message channel (capacity 256), the shutdown and event
    /// channels, and spawns the signal handler, which stops listening once
    /// the engine shuts down.
    pub fn with_transport(project_path: PathBuf, settings: Settings, transport: T) -> Self {
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let signal_task = signals::spawn_signal_handler(msg_tx.clone(), shutdown_rx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            signal_task: Some(signal_task),
            project_path,
            timers: TimerRegistry::new(),
            transport: Arc::new(transport),
            event_tx,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Kick off the loader and page animations.
    pub fn start(&mut self) {
        info!("Starting page");
        self.process_message(Message::Start);
    }

    /// Process a single message through the TEA update cycle and emit
    /// EngineEvents for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &mut self.timers,
            &self.transport,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// The engine holds a sender itself, so the channel never closes while
    /// the engine is alive.
    pub async fn process_next(&mut self) {
        if let Some(msg) = self.msg_rx.recv().await {
            self.process_message(msg);
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of timer tasks still running.
    pub fn active_timers(&self) -> usize {
        self.timers.active()
    }

    /// Stop every timer and tell background tasks to finish.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        self.timers.cancel_all();
        self.state.timers.disarm_all();

        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.signal_task.take() {
            let _ = task.await;
        }
        // Let aborted tasks observe cancellation before the runtime goes away
        tokio::task::yield_now().await;

        info!("Engine shut down");
    }

    fn emit(&self, event: EngineEvent) {
        trace!("EngineEvent: {}", event.event_type());
        // No receivers is fine
        let _ = self.event_tx.send(event);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.progress != post.progress && post.loader_visible {
            self.emit(EngineEvent::LoaderProgress {
                progress: post.progress,
            });
        }
        if pre.loader_visible && !post.loader_visible {
            debug!("Loader dismissed at {}%", post.progress);
            self.emit(EngineEvent::LoaderDismissed);
        }

        if pre.section != post.section {
            self.emit(EngineEvent::SectionChanged {
                from: pre.section,
                to: post.section,
            });
        }
        if pre.scrolled != post.scrolled {
            self.emit(EngineEvent::ScrolledChanged {
                scrolled: post.scrolled,
            });
        }

        if pre.category != post.category || pre.search != post.search {
            self.emit(EngineEvent::FilterChanged {
                category: post.category,
                search: post.search.clone(),
                visible: self.state.portfolio_view().projects().len(),
            });
        }
        if pre.tech != post.tech {
            self.emit(EngineEvent::TechCategoryChanged {
                category: post.tech,
            });
        }
        if pre.hero_index != post.hero_index {
            self.emit(EngineEvent::HeroWordChanged {
                word: self.state.hero.current(),
            });
        }
        if !pre.counters_started && post.counters_started {
            self.emit(EngineEvent::CountersStarted);
        }

        if pre.phase != post.phase {
            self.emit(EngineEvent::SubmissionPhaseChanged {
                from: pre.phase,
                to: post.phase,
            });
        }
        // Only newly issued ids count; a dismiss can change the newest visible
        // toast without raising anything.
        for toast in self.state.toasts.items() {
            if toast.id > pre.last_toast_id {
                self.emit(EngineEvent::ToastRaised {
                    toast: toast.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;
    use codewave_core::{FormField, LoaderPhase};
    use std::time::Duration;
    use tokio::sync::broadcast::error::TryRecvError;

    fn engine() -> Engine {
        Engine::with_settings(PathBuf::from("."), Settings::default())
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_runs_to_dismissal() {
        let mut engine = engine();
        let mut events = engine.subscribe();
        engine.start();

        while engine.state.loader.is_visible() {
            engine.process_next().await;
        }

        let events = drain_events(&mut events);
        assert!(events.contains(&EngineEvent::LoaderDismissed));
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::LoaderProgress { .. })));
        assert_eq!(engine.state.loader.phase(), LoaderPhase::Dismissed);
        assert_eq!(engine.state.loader.progress(), 100);
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_round_trip() {
        let mut engine = engine();
        engine.state.loader.force_finish();
        let mut events = engine.subscribe();

        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Message, "Hello"),
        ] {
            engine.process_message(Message::SetField {
                field,
                value: value.into(),
            });
        }
        engine.process_message(Message::SubmitContact);
        assert_eq!(engine.state.contact.phase(), SubmissionPhase::Submitting);

        let started = tokio::time::Instant::now();
        while engine.state.contact.phase() == SubmissionPhase::Submitting {
            engine.process_next().await;
        }
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(engine.state.contact.phase(), SubmissionPhase::Submitted);

        while engine.state.contact.phase() == SubmissionPhase::Submitted {
            engine.process_next().await;
        }
        assert!(engine.state.contact.form().name.is_empty());

        let events = drain_events(&mut events);
        assert!(events.contains(&EngineEvent::SubmissionPhaseChanged {
            from: SubmissionPhase::Idle,
            to: SubmissionPhase::Submitting,
        }));
        assert!(events
            .iter()
            .any(|e| matches!(e, EngineEvent::ToastRaised { .. })));
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_change_event_reports_visible_count() {
        let mut engine = engine();
        let mut events = engine.subscribe();
        engine.process_message(Message::SelectCategory(CategoryFilter::Featured));

        let events = drain_events(&mut events);
        assert!(events.contains(&EngineEvent::FilterChanged {
            category: CategoryFilter::Featured,
            search: String::new(),
            visible: 3,
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_timers() {
        let mut engine = engine();
        let mut events = engine.subscribe();
        engine.start();
        assert!(engine.active_timers() > 0);

        engine.shutdown().await;
        assert_eq!(engine.active_timers(), 0);
        assert!(drain_events(&mut events).contains(&EngineEvent::Shutdown));
        assert!(*engine.shutdown_rx.borrow());
        assert!(engine.signal_task.is_none());

        // A second shutdown is harmless
        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_pending_submission() {
        let mut engine = Engine::with_transport(
            PathBuf::from("."),
            Settings::default(),
            SimulatedTransport::new(Duration::from_secs(60)),
        );
        engine.state.loader.force_finish();
        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Message, "Hello"),
        ] {
            engine.process_message(Message::SetField {
                field,
                value: value.into(),
            });
        }
        engine.process_message(Message::SubmitContact);
        assert_eq!(engine.state.contact.phase(), SubmissionPhase::Submitting);
        assert!(engine.active_timers() >= 1);

        engine.shutdown().await;
        assert_eq!(engine.active_timers(), 0);

        tokio::time::sleep(Duration::from_secs(120)).await;
        while let Ok(msg) = engine.msg_rx.try_recv() {
            assert!(
                !matches!(
                    msg,
                    Message::SubmissionSucceeded(_) | Message::SubmissionFailed(_)
                ),
                "submission outlived shutdown: {:?}",
                msg
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissing_newest_toast_raises_nothing() {
        let mut engine = engine();
        engine.state.toasts.push(ToastKind::Error, "first", "");
        let second = engine.state.toasts.push(ToastKind::Info, "second", "");
        let mut events = engine.subscribe();

        engine.process_message(Message::DismissToast(second));

        assert_eq!(engine.state.toasts.latest().map(|t| t.id), Some(1));
        let events = drain_events(&mut events);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, EngineEvent::ToastRaised { .. })),
            "unexpected events: {:?}",
            events
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_toast_after_dismiss_is_raised_once() {
        let mut engine = engine();
        engine.state.loader.force_finish();
        let first = engine.state.toasts.push(ToastKind::Info, "first", "");
        engine.process_message(Message::DismissToast(first));
        for (field, value) in [
            (FormField::Name, "Ada"),
            (FormField::Email, "ada@example.com"),
            (FormField::Message, "Hello"),
        ] {
            engine.process_message(Message::SetField {
                field,
                value: value.into(),
            });
        }
        engine.process_message(Message::SubmitContact);
        let mut events = engine.subscribe();

        engine.process_message(Message::SubmissionFailed("offline".into()));

        let raised: Vec<_> = drain_events(&mut events)
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::ToastRaised { toast } => Some(toast.id),
                _ => None,
            })
            .collect();
        assert_eq!(raised, vec![first + 1]);
    }
}
