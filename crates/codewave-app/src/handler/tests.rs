//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::timers::TimerKind;
use crate::toast::ToastKind;
use codewave_core::catalog::PROJECTS;
use codewave_core::{
    CategoryFilter, FormField, LoaderPhase, Receipt, SectionBounds, SectionId, SubmissionPhase,
    TechCategory,
};

/// Run a message and every follow-up it produces, collecting the actions.
fn process(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.actions);
        next = result.message;
    }
    actions
}

/// Deliver the current instance of `kind` as if its timer elapsed.
fn fire(state: &mut AppState, kind: TimerKind) -> Vec<UpdateAction> {
    let generation = state
        .timers
        .current(kind)
        .unwrap_or_else(|| panic!("{:?} is not armed", kind));
    process(state, Message::TimerFired { kind, generation })
}

fn scheduled(actions: &[UpdateAction], kind: TimerKind) -> Option<TimerSpec> {
    actions.iter().find_map(|a| match a {
        UpdateAction::ScheduleTimer(spec) if spec.kind == kind => Some(*spec),
        _ => None,
    })
}

fn cancelled(actions: &[UpdateAction], kind: TimerKind) -> bool {
    actions.contains(&UpdateAction::CancelTimer(kind))
}

/// State with the loader already out of the way.
fn ready_state() -> AppState {
    let mut state = AppState::new();
    state.loader.force_finish();
    state
}

fn fill_valid_form(state: &mut AppState) {
    for (field, value) in [
        (FormField::Name, "Ada Lovelace"),
        (FormField::Email, "ada@example.com"),
        (FormField::Message, "We need an app."),
    ] {
        process(
            state,
            Message::SetField {
                field,
                value: value.to_string(),
            },
        );
    }
}

// ─────────────────────────────────────────────────────────
// Quit and keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_should_quit() {
    let mut state = AppState::new();
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
    state.loader.force_finish();
    state.ui_mode = UiMode::Form;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_loader_keys() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::SkipLoader)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::SkipLoader)
    ));
    assert!(handle_key(&state, InputKey::Char('j')).is_none());
}

#[test]
fn test_digit_keys_jump_to_sections() {
    let state = ready_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::JumpToSection(SectionId::Portfolio))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('6')),
        Some(Message::JumpToSection(SectionId::Contact))
    ));
    assert!(handle_key(&state, InputKey::Char('7')).is_none());
}

#[test]
fn test_search_mode_keys() {
    let mut state = ready_state();
    state.ui_mode = UiMode::Search;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::SearchInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::EndSearch)
    ));
}

#[test]
fn test_form_keys_on_select_field() {
    let mut state = ready_state();
    state.ui_mode = UiMode::Form;
    state.focused_field = FormField::Budget;

    assert!(matches!(
        handle_key(&state, InputKey::Right),
        Some(Message::CycleOption { forward: true })
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Left),
        Some(Message::CycleOption { forward: false })
    ));
    assert!(handle_key(&state, InputKey::Char('a')).is_none());
}

#[test]
fn test_form_enter_in_message_adds_newline() {
    let mut state = ready_state();
    state.ui_mode = UiMode::Form;
    state.focused_field = FormField::Message;
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::FieldInput('\n'))
    ));
    state.focused_field = FormField::Email;
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SubmitContact)
    ));
}

// ─────────────────────────────────────────────────────────
// Loader
// ─────────────────────────────────────────────────────────

#[test]
fn test_start_schedules_startup_timers() {
    let mut state = AppState::new();
    let actions = process(&mut state, Message::Start);

    let tick = scheduled(&actions, TimerKind::LoaderTick).unwrap();
    assert!(tick.repeat);
    assert_eq!(tick.delay, Duration::from_millis(200));
    assert_eq!(
        scheduled(&actions, TimerKind::LoaderGrace).unwrap().delay,
        Duration::from_millis(1000)
    );
    assert_eq!(
        scheduled(&actions, TimerKind::PageReady).unwrap().delay,
        Duration::from_millis(3000)
    );
    assert!(scheduled(&actions, TimerKind::HeroRotate).unwrap().repeat);
    assert!(scheduled(&actions, TimerKind::TechReveal).is_some());
}

#[test]
fn test_start_without_loader_skips_loader_timers() {
    let mut state = ready_state();
    let actions = process(&mut state, Message::Start);
    assert!(scheduled(&actions, TimerKind::LoaderTick).is_none());
    assert!(scheduled(&actions, TimerKind::HeroRotate).is_some());
}

#[test]
fn test_loader_ticks_to_completion_then_dismisses() {
    let mut state = AppState::new();
    process(&mut state, Message::Start);

    let mut last = 0;
    let mut actions = Vec::new();
    for _ in 0..100 {
        actions = fire(&mut state, TimerKind::LoaderTick);
        assert!(state.loader.progress() > last);
        last = state.loader.progress();
        if state.loader.phase() != LoaderPhase::Loading {
            break;
        }
    }

    assert_eq!(state.loader.progress(), 100);
    assert_eq!(
        state.loader.phase(),
        LoaderPhase::Completing { skipped: false }
    );
    assert!(cancelled(&actions, TimerKind::LoaderTick));
    assert_eq!(
        scheduled(&actions, TimerKind::LoaderDismiss).unwrap().delay,
        Duration::from_millis(500)
    );

    let actions = fire(&mut state, TimerKind::LoaderDismiss);
    assert!(!state.loader.is_visible());
    assert!(cancelled(&actions, TimerKind::PageReady));
}

#[test]
fn test_skip_requires_grace_period() {
    let mut state = AppState::new();
    process(&mut state, Message::Start);

    let actions = process(&mut state, Message::SkipLoader);
    assert!(actions.is_empty());
    assert_eq!(state.loader.phase(), LoaderPhase::Loading);

    fire(&mut state, TimerKind::LoaderGrace);
    assert!(state.loader.skip_available());

    let actions = process(&mut state, Message::SkipLoader);
    assert_eq!(state.loader.progress(), 100);
    assert_eq!(
        state.loader.phase(),
        LoaderPhase::Completing { skipped: true }
    );
    assert!(cancelled(&actions, TimerKind::LoaderTick));
    assert_eq!(
        scheduled(&actions, TimerKind::LoaderDismiss).unwrap().delay,
        Duration::from_millis(300)
    );
}

#[test]
fn test_page_ready_ceiling_hides_loader() {
    let mut state = AppState::new();
    process(&mut state, Message::Start);
    fire(&mut state, TimerKind::LoaderTick);

    let actions = fire(&mut state, TimerKind::PageReady);
    assert!(!state.loader.is_visible());
    assert_eq!(state.loader.progress(), 100);
    assert!(cancelled(&actions, TimerKind::LoaderTick));
    assert!(!state.timers.is_armed(TimerKind::LoaderTick));
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut state = ready_state();
    let first = state.timers.arm(TimerKind::TechReveal);
    state.timers.arm(TimerKind::TechReveal);

    process(
        &mut state,
        Message::TimerFired {
            kind: TimerKind::TechReveal,
            generation: first,
        },
    );
    assert!(!state.tech.is_revealed());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_jump_updates_active_section_and_scrolled_flag() {
    let mut state = ready_state();
    assert!(!state.tracker.scrolled());

    process(&mut state, Message::JumpToSection(SectionId::Portfolio));
    assert_eq!(state.tracker.active(), SectionId::Portfolio);
    assert!(state.tracker.scrolled());

    process(&mut state, Message::ScrollToTop);
    assert_eq!(state.tracker.active(), SectionId::Home);
    assert!(!state.tracker.scrolled());
}

#[test]
fn test_measured_layout_replaces_estimate() {
    let mut state = ready_state();
    let bounds: Vec<SectionBounds> = [
        (SectionId::Home, 0, 10),
        (SectionId::Services, 10, 4),
        (SectionId::Portfolio, 14, 2),
        (SectionId::Technologies, 16, 2),
        (SectionId::About, 18, 4),
        (SectionId::Contact, 22, 8),
    ]
    .into_iter()
    .map(|(section, offset, height)| SectionBounds::new(section, offset, height))
    .collect();

    let actions = process(
        &mut state,
        Message::LayoutMeasured {
            bounds: bounds.clone(),
            content_height: 30,
        },
    );
    assert_eq!(state.page.content_height, 30);
    assert_eq!(state.page.max_scroll(), 6);
    // About now fits in the first screen, so the counters kick off
    assert!(scheduled(&actions, TimerKind::CounterStep).is_some());
    assert_eq!(state.tracker.active(), SectionId::Home);

    let actions = process(
        &mut state,
        Message::LayoutMeasured {
            bounds,
            content_height: 30,
        },
    );
    assert!(actions.is_empty());
}

#[test]
fn test_scroll_past_bottom_is_clamped() {
    let mut state = ready_state();
    process(&mut state, Message::ScrollToBottom);
    let bottom = state.page.scroll;
    let actions = process(&mut state, Message::ScrollBy(5));
    assert_eq!(state.page.scroll, bottom);
    assert!(actions.is_empty());
    assert_eq!(state.tracker.active(), SectionId::Contact);
}

#[test]
fn test_menu_select_jumps_and_closes() {
    let mut state = ready_state();
    process(&mut state, Message::ToggleMenu);
    assert!(state.menu_open());
    assert_eq!(state.menu_index, 0);

    process(&mut state, Message::MenuDown);
    process(&mut state, Message::MenuDown);
    process(&mut state, Message::MenuSelect);

    assert!(!state.menu_open());
    assert_eq!(state.tracker.active(), SectionId::Portfolio);
}

#[test]
fn test_menu_wraps() {
    let mut state = ready_state();
    process(&mut state, Message::ToggleMenu);
    process(&mut state, Message::MenuUp);
    assert_eq!(state.menu_index, SectionId::ALL.len() - 1);
}

// ─────────────────────────────────────────────────────────
// Stat counters
// ─────────────────────────────────────────────────────────

#[test]
fn test_counters_start_when_about_visible() {
    let mut state = ready_state();
    let actions = process(&mut state, Message::JumpToSection(SectionId::Portfolio));
    assert!(scheduled(&actions, TimerKind::CounterStep).is_none());
    assert!(!state.counters_started());

    let actions = process(&mut state, Message::JumpToSection(SectionId::About));
    let step = scheduled(&actions, TimerKind::CounterStep).unwrap();
    assert!(step.repeat);
    assert!(state.counters_started());

    let mut actions = Vec::new();
    for _ in 0..60 {
        actions = fire(&mut state, TimerKind::CounterStep);
    }
    assert!(cancelled(&actions, TimerKind::CounterStep));
    let values: Vec<u32> = state.counters.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![150, 100, 8, 12]);

    // Scrolling back does not restart them
    process(&mut state, Message::ScrollToTop);
    let actions = process(&mut state, Message::JumpToSection(SectionId::About));
    assert!(scheduled(&actions, TimerKind::CounterStep).is_none());
}

#[test]
fn test_counters_wait_for_loader() {
    let mut state = AppState::new();
    process(&mut state, Message::JumpToSection(SectionId::About));
    assert!(!state.counters_started());

    let actions = fire_page_ready(&mut state);
    assert!(scheduled(&actions, TimerKind::CounterStep).is_some());
}

fn fire_page_ready(state: &mut AppState) -> Vec<UpdateAction> {
    process(state, Message::Start);
    fire(state, TimerKind::PageReady)
}

// ─────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────

#[test]
fn test_category_and_search_combine() {
    let mut state = ready_state();
    process(&mut state, Message::SelectCategory(CategoryFilter::Mobile));
    let mobile = state.portfolio_view().projects().len();
    assert!(mobile > 0 && mobile < PROJECTS.len());

    process(&mut state, Message::SetSearch("zzz-no-match".into()));
    assert!(state.portfolio_view().projects().is_empty());

    process(&mut state, Message::ClearFilters);
    assert_eq!(state.filter.category, CategoryFilter::All);
    assert!(state.filter.search.is_empty());
    assert_eq!(state.portfolio_view().projects().len(), PROJECTS.len());
}

#[test]
fn test_load_more_keeps_search() {
    let mut state = ready_state();
    process(&mut state, Message::SelectCategory(CategoryFilter::Featured));
    process(&mut state, Message::SetSearch("react".into()));
    process(&mut state, Message::LoadMore);
    assert_eq!(state.filter.category, CategoryFilter::All);
    assert_eq!(state.filter.search, "react");
}

#[test]
fn test_start_search_focuses_portfolio() {
    let mut state = ready_state();
    process(&mut state, Message::StartSearch);
    assert_eq!(state.ui_mode, UiMode::Search);
    assert_eq!(state.tracker.active(), SectionId::Portfolio);

    for key in [InputKey::Char('a'), InputKey::Char('p'), InputKey::Backspace] {
        process(&mut state, Message::Key(key));
    }
    assert_eq!(state.filter.search, "a");

    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Browse);
    assert_eq!(state.filter.search, "a");
}

#[test]
fn test_category_cycling_wraps() {
    let mut state = ready_state();
    process(&mut state, Message::PrevCategory);
    assert_eq!(state.filter.category, CategoryFilter::Featured);
    process(&mut state, Message::NextCategory);
    assert_eq!(state.filter.category, CategoryFilter::All);
}

// ─────────────────────────────────────────────────────────
// Showcase
// ─────────────────────────────────────────────────────────

#[test]
fn test_hero_rotates_on_timer() {
    let mut state = ready_state();
    process(&mut state, Message::Start);
    let first = state.hero.current();
    fire(&mut state, TimerKind::HeroRotate);
    assert_ne!(state.hero.current(), first);
}

#[test]
fn test_tech_tab_change_resets_and_reveals() {
    let mut state = ready_state();
    process(&mut state, Message::Start);
    fire(&mut state, TimerKind::TechReveal);
    assert!(state.tech.is_revealed());

    let actions = process(&mut state, Message::SelectTechCategory(TechCategory::Backend));
    assert_eq!(state.tech.category(), TechCategory::Backend);
    assert!(!state.tech.is_revealed());
    assert_eq!(
        scheduled(&actions, TimerKind::TechReveal).unwrap().delay,
        Duration::from_millis(100)
    );

    fire(&mut state, TimerKind::TechReveal);
    assert!(state.tech.is_revealed());
}

// ─────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────

#[test]
fn test_invalid_submit_focuses_first_error() {
    let mut state = ready_state();
    process(
        &mut state,
        Message::SetField {
            field: FormField::Email,
            value: "not-an-email".into(),
        },
    );
    let actions = process(&mut state, Message::SubmitContact);

    assert!(actions.is_empty());
    assert_eq!(state.contact.phase(), SubmissionPhase::Idle);
    assert_eq!(state.focused_field, FormField::Name);
    assert!(state.contact.error_for(FormField::Email).is_some());
    assert!(state.contact.error_for(FormField::Message).is_some());
}

#[test]
fn test_submit_success_cycle() {
    let mut state = ready_state();
    fill_valid_form(&mut state);

    let actions = process(&mut state, Message::SubmitContact);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SubmitContact { form }] if form.email == "ada@example.com"
    ));
    assert_eq!(state.contact.phase(), SubmissionPhase::Submitting);

    // A second submit while in flight is ignored
    assert!(process(&mut state, Message::SubmitContact).is_empty());

    let actions = process(&mut state, Message::SubmissionSucceeded(Receipt::new("CW-1")));
    assert_eq!(state.contact.phase(), SubmissionPhase::Submitted);
    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Message sent successfully!");
    assert_eq!(
        scheduled(&actions, TimerKind::SubmitReset).unwrap().delay,
        Duration::from_millis(3000)
    );
    assert!(scheduled(&actions, TimerKind::ToastExpire(toast.id)).is_some());

    // Fields are locked until the reset
    process(
        &mut state,
        Message::SetField {
            field: FormField::Name,
            value: "Someone else".into(),
        },
    );
    assert_eq!(state.contact.form().name, "Ada Lovelace");

    fire(&mut state, TimerKind::SubmitReset);
    assert_eq!(state.contact.phase(), SubmissionPhase::Idle);
    assert!(state.contact.form().name.is_empty());
    assert!(state.contact.form().email.is_empty());
}

#[test]
fn test_submit_failure_keeps_fields() {
    let mut state = ready_state();
    fill_valid_form(&mut state);
    process(&mut state, Message::SubmitContact);

    process(&mut state, Message::SubmissionFailed("offline".into()));
    assert_eq!(state.contact.phase(), SubmissionPhase::Idle);
    assert_eq!(state.contact.form().email, "ada@example.com");
    let toast = state.toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.description, "offline. Please try again in a moment.");
}

#[test]
fn test_late_receipt_is_ignored() {
    let mut state = ready_state();
    let actions = process(&mut state, Message::SubmissionSucceeded(Receipt::new("CW-2")));
    assert!(actions.is_empty());
    assert_eq!(state.contact.phase(), SubmissionPhase::Idle);
    assert!(state.toasts.is_empty());
}

#[test]
fn test_select_field_rejects_unknown_option() {
    let mut state = ready_state();
    process(
        &mut state,
        Message::SetField {
            field: FormField::Budget,
            value: "a-million".into(),
        },
    );
    assert!(state.contact.form().budget.is_empty());

    state.focused_field = FormField::Budget;
    process(&mut state, Message::CycleOption { forward: true });
    assert!(!state.contact.form().budget.is_empty());
}

#[test]
fn test_typing_into_focused_field() {
    let mut state = ready_state();
    process(&mut state, Message::EnterForm);
    assert_eq!(state.ui_mode, UiMode::Form);
    assert_eq!(state.tracker.active(), SectionId::Contact);

    for key in [InputKey::Char('H'), InputKey::Char('i')] {
        process(&mut state, Message::Key(key));
    }
    assert_eq!(state.contact.form().name, "Hi");

    process(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focused_field, FormField::Email);
    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Browse);
}

// ─────────────────────────────────────────────────────────
// Toasts
// ─────────────────────────────────────────────────────────

#[test]
fn test_toast_expires_on_timer() {
    let mut state = ready_state();
    fill_valid_form(&mut state);
    process(&mut state, Message::SubmitContact);
    process(&mut state, Message::SubmissionSucceeded(Receipt::new("CW-3")));
    let id = state.toasts.latest().unwrap().id;

    fire(&mut state, TimerKind::ToastExpire(id));
    assert!(state.toasts.is_empty());
}

#[test]
fn test_dismiss_toast_cancels_expiry() {
    let mut state = ready_state();
    fill_valid_form(&mut state);
    process(&mut state, Message::SubmitContact);
    process(&mut state, Message::SubmissionFailed("down".into()));
    let id = state.toasts.latest().unwrap().id;

    let actions = process(&mut state, Message::DismissToast(id));
    assert!(state.toasts.is_empty());
    assert!(cancelled(&actions, TimerKind::ToastExpire(id)));
}

#[test]
fn test_d_dismisses_newest_toast() {
    let mut state = ready_state();
    assert!(handle_key(&state, InputKey::Char('d')).is_none());

    state.toasts.push(ToastKind::Info, "older", "");
    let newest = state.toasts.push(ToastKind::Error, "newer", "");
    let msg = handle_key(&state, InputKey::Char('d'));
    assert!(matches!(msg, Some(Message::DismissToast(id)) if id == newest));

    process(&mut state, Message::DismissToast(newest));
    assert_eq!(state.toasts.items().len(), 1);
    assert!(matches!(
        handle_key(&state, InputKey::Char('d')),
        Some(Message::DismissToast(id)) if id != newest
    ));
}
