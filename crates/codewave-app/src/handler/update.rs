//! Main update function - handles state transitions (TEA pattern)

use tracing::trace;

use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerKind;

use super::{
    contact, keys::handle_key, loader, navigation, portfolio, showcase, UpdateAction, UpdateResult,
};

/// Process a message and update state
/// Returns optional follow-up message and/or actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Start => loader::handle_start(state),

        Message::TimerFired { kind, generation } => handle_timer(state, kind, generation),

        Message::SkipLoader => loader::handle_skip(state),

        // ─────────────────────────────────────────────────────────
        // Page Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollBy(delta) => navigation::handle_scroll_by(state, delta),
        Message::ScrollTo(row) => navigation::handle_scroll_to(state, row),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::ScrollToTop => navigation::handle_scroll_to_top(state),
        Message::ScrollToBottom => navigation::handle_scroll_to_bottom(state),
        Message::JumpToSection(section) => navigation::handle_jump_to_section(state, section),
        Message::ViewportResized { height } => {
            navigation::handle_viewport_resized(state, height)
        }
        Message::LayoutMeasured {
            bounds,
            content_height,
        } => navigation::handle_layout_measured(state, bounds, content_height),

        // ─────────────────────────────────────────────────────────
        // Navigation Menu
        // ─────────────────────────────────────────────────────────
        Message::ToggleMenu => navigation::handle_toggle_menu(state),
        Message::MenuUp => navigation::handle_menu_up(state),
        Message::MenuDown => navigation::handle_menu_down(state),
        Message::MenuSelect => navigation::handle_menu_select(state),

        // ─────────────────────────────────────────────────────────
        // Portfolio Filter
        // ─────────────────────────────────────────────────────────
        Message::SelectCategory(category) => portfolio::handle_select_category(state, category),
        Message::NextCategory => portfolio::handle_next_category(state),
        Message::PrevCategory => portfolio::handle_prev_category(state),
        Message::StartSearch => portfolio::handle_start_search(state),
        Message::SearchInput(ch) => portfolio::handle_search_input(state, ch),
        Message::SearchBackspace => portfolio::handle_search_backspace(state),
        Message::SetSearch(search) => portfolio::handle_set_search(state, search),
        Message::EndSearch => portfolio::handle_end_search(state),
        Message::ClearFilters => portfolio::handle_clear_filters(state),
        Message::LoadMore => portfolio::handle_load_more(state),

        // ─────────────────────────────────────────────────────────
        // Technology Showcase
        // ─────────────────────────────────────────────────────────
        Message::SelectTechCategory(category) => showcase::handle_select_tech(state, category),
        Message::NextTechCategory => showcase::handle_next_tech(state),
        Message::PrevTechCategory => showcase::handle_prev_tech(state),

        // ─────────────────────────────────────────────────────────
        // Contact Form
        // ─────────────────────────────────────────────────────────
        Message::EnterForm => contact::handle_enter_form(state),
        Message::ExitForm => contact::handle_exit_form(state),
        Message::FocusField(field) => contact::handle_focus_field(state, field),
        Message::NextField => contact::handle_next_field(state),
        Message::PrevField => contact::handle_prev_field(state),
        Message::FieldInput(ch) => contact::handle_field_input(state, ch),
        Message::FieldBackspace => contact::handle_field_backspace(state),
        Message::SetField { field, value } => contact::handle_set_field(state, field, value),
        Message::CycleOption { forward } => contact::handle_cycle_option(state, forward),
        Message::SubmitContact => contact::handle_submit(state),
        Message::SubmissionSucceeded(receipt) => {
            contact::handle_submission_succeeded(state, receipt)
        }
        Message::SubmissionFailed(reason) => contact::handle_submission_failed(state, reason),

        // ─────────────────────────────────────────────────────────
        // Toasts
        // ─────────────────────────────────────────────────────────
        Message::DismissToast(id) => {
            state.toasts.dismiss(id);
            state.timers.disarm(TimerKind::ToastExpire(id));
            UpdateResult::action(UpdateAction::CancelTimer(TimerKind::ToastExpire(id)))
        }
    }
}

/// Route a timer firing, dropping it if the timer was re-armed or cancelled
/// after it was scheduled.
fn handle_timer(state: &mut AppState, kind: TimerKind, generation: u64) -> UpdateResult {
    if !state.timers.is_current(kind, generation) {
        trace!("Stale timer {:?} #{} dropped", kind, generation);
        return UpdateResult::none();
    }

    match kind {
        TimerKind::LoaderTick => loader::handle_tick(state),
        TimerKind::HeroRotate => showcase::handle_hero_rotate(state),
        TimerKind::CounterStep => showcase::handle_counter_step(state),

        // One-shot timers are spent once they fire
        TimerKind::LoaderGrace => {
            state.timers.disarm(kind);
            loader::handle_grace_elapsed(state)
        }
        TimerKind::LoaderDismiss => {
            state.timers.disarm(kind);
            loader::handle_dismiss(state)
        }
        TimerKind::PageReady => {
            state.timers.disarm(kind);
            loader::handle_page_ready(state)
        }
        TimerKind::TechReveal => {
            state.timers.disarm(kind);
            showcase::handle_tech_reveal(state)
        }
        TimerKind::SubmitReset => {
            state.timers.disarm(kind);
            contact::handle_submit_reset(state)
        }
        TimerKind::ToastExpire(id) => {
            state.timers.disarm(kind);
            state.toasts.dismiss(id);
            UpdateResult::none()
        }
    }
}
