//! End-to-end flows through the engine with a recording transport.
//!
//! Time is paused, so the loader, reveal and reset delays elapse instantly
//! while keeping their relative order.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use codewave_app::config::Settings;
use codewave_app::{Engine, EngineEvent, Message, SubmissionTransport, TransportError};
use codewave_core::{
    CategoryFilter, ContactForm, FormField, LoaderPhase, Receipt, SectionId, SubmissionPhase,
};
use tokio::sync::broadcast;

/// Accepts every form and keeps a copy.
#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Arc<Mutex<Vec<ContactForm>>>,
}

impl SubmissionTransport for RecordingTransport {
    async fn submit(&self, form: ContactForm) -> Result<Receipt, TransportError> {
        self.sent.lock().unwrap().push(form);
        Ok(Receipt::new("CW-TEST-0001"))
    }
}

fn engine_with(transport: RecordingTransport) -> Engine<RecordingTransport> {
    Engine::with_transport(PathBuf::from("."), Settings::default(), transport)
}

fn drain(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn skip_then_browse_then_contact() {
    let transport = RecordingTransport::default();
    let mut engine = engine_with(transport.clone());
    let mut events = engine.subscribe();
    engine.start();

    // Skip only works once the grace period has passed
    engine.process_message(Message::SkipLoader);
    assert_eq!(engine.state.loader.phase(), LoaderPhase::Loading);
    while !engine.state.loader.skip_available() && engine.state.loader.is_visible() {
        engine.process_next().await;
    }
    engine.process_message(Message::SkipLoader);
    while engine.state.loader.is_visible() {
        engine.process_next().await;
    }
    assert_eq!(engine.state.loader.progress(), 100);

    // Counters wait for the about section
    assert!(!engine.state.counters_started());
    engine.process_message(Message::JumpToSection(SectionId::About));
    assert_eq!(engine.state.tracker.active(), SectionId::About);
    assert!(engine.state.counters_started());
    while engine.state.counters.iter().any(|c| c.is_running()) {
        engine.process_next().await;
    }
    let values: Vec<u32> = engine.state.counters.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![150, 100, 8, 12]);

    // Portfolio filter
    engine.process_message(Message::SelectCategory(CategoryFilter::Web));
    engine.process_message(Message::SetSearch("platform".into()));
    let titles: Vec<&str> = engine
        .state
        .portfolio_view()
        .projects()
        .iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["E-Commerce Platform", "Real Estate Platform"]);

    // Contact submission
    for (field, value) in [
        (FormField::Name, "Grace Hopper"),
        (FormField::Email, "grace@example.com"),
        (FormField::Message, "Let's build a compiler."),
    ] {
        engine.process_message(Message::SetField {
            field,
            value: value.into(),
        });
    }
    engine.process_message(Message::SubmitContact);
    while engine.state.contact.phase() != SubmissionPhase::Submitted {
        engine.process_next().await;
    }
    assert_eq!(
        engine.state.contact.receipt().map(|r| r.reference.as_str()),
        Some("CW-TEST-0001")
    );

    let sent = transport.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Grace Hopper");

    // The form resets itself after the acknowledgement delay
    while engine.state.contact.phase() != SubmissionPhase::Idle {
        engine.process_next().await;
    }
    assert!(engine.state.contact.form().email.is_empty());

    let events = drain(&mut events);
    assert!(events.contains(&EngineEvent::LoaderDismissed));
    assert!(events.contains(&EngineEvent::CountersStarted));
    assert!(events.contains(&EngineEvent::SubmissionPhaseChanged {
        from: SubmissionPhase::Submitted,
        to: SubmissionPhase::Idle,
    }));

    engine.shutdown().await;
    assert_eq!(engine.active_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn invalid_form_never_reaches_transport() {
    let transport = RecordingTransport::default();
    let mut engine = engine_with(transport.clone());
    engine.state.loader.force_finish();

    engine.process_message(Message::SetField {
        field: FormField::Email,
        value: "not-an-email".into(),
    });
    engine.process_message(Message::SubmitContact);

    assert_eq!(engine.state.contact.phase(), SubmissionPhase::Idle);
    assert!(engine.state.contact.error_for(FormField::Email).is_some());
    assert!(engine.state.contact.error_for(FormField::Name).is_some());
    assert_eq!(engine.state.focused_field, FormField::Name);
    assert!(transport.sent.lock().unwrap().is_empty());
    engine.shutdown().await;
}
