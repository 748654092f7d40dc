//! Contact form editing and submission handlers

use codewave_core::{FieldKind, FormField, Receipt, SectionId, SubmitRejection};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::timers::TimerKind;
use crate::toast::ToastKind;

use super::helpers::{raise_toast, schedule_once};
use super::{UpdateAction, UpdateResult};

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "We'll get back to you within 24 hours.";
pub const FAILURE_TITLE: &str = "Message not sent";
pub const FAILURE_DESCRIPTION: &str = "Please try again in a moment.";

/// Focus the form and bring the contact section into view.
pub fn handle_enter_form(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Form;
    UpdateResult::message(Message::JumpToSection(SectionId::Contact))
}

pub fn handle_exit_form(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Form {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

pub fn handle_focus_field(state: &mut AppState, field: FormField) -> UpdateResult {
    state.focused_field = field;
    UpdateResult::none()
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    state.focused_field = state.focused_field.next();
    UpdateResult::none()
}

pub fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    state.focused_field = state.focused_field.prev();
    UpdateResult::none()
}

pub fn handle_field_input(state: &mut AppState, ch: char) -> UpdateResult {
    let field = state.focused_field;
    if !state.contact.push_char(field, ch) {
        debug!("Ignored input for {:?} in {:?}", field, state.contact.phase());
    }
    UpdateResult::none()
}

pub fn handle_field_backspace(state: &mut AppState) -> UpdateResult {
    let field = state.focused_field;
    state.contact.pop_char(field);
    UpdateResult::none()
}

/// Select fields only take one of their option values (or empty).
pub fn handle_set_field(state: &mut AppState, field: FormField, value: String) -> UpdateResult {
    if field.kind() == FieldKind::Select
        && !value.is_empty()
        && !field.options().iter().any(|o| o.value == value)
    {
        warn!("Unknown option {:?} for {}", value, field.key());
        return UpdateResult::none();
    }
    state.contact.set_field(field, value);
    UpdateResult::none()
}

pub fn handle_cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    let field = state.focused_field;
    state.contact.cycle_option(field, forward);
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.contact.begin_submit() {
        Ok(form) => {
            info!("Submitting contact form for {}", form.email);
            UpdateResult::action(UpdateAction::SubmitContact { form })
        }
        Err(SubmitRejection::Invalid(errors)) => {
            debug!("Contact form has {} invalid field(s)", errors.len());
            if let Some(first) = errors.first() {
                state.focused_field = first.field;
            }
            UpdateResult::none()
        }
        Err(rejection) => {
            debug!("Submit ignored: {}", rejection);
            UpdateResult::none()
        }
    }
}

pub fn handle_submission_succeeded(state: &mut AppState, receipt: Receipt) -> UpdateResult {
    let reference = receipt.reference.clone();
    if !state.contact.complete(receipt) {
        warn!("Late submission receipt {} ignored", reference);
        return UpdateResult::none();
    }
    info!("Contact form delivered ({})", reference);

    let reset_ms = state.settings.contact.reset_delay_ms;
    UpdateResult::actions(vec![
        raise_toast(state, ToastKind::Success, SUCCESS_TITLE, SUCCESS_DESCRIPTION),
        schedule_once(state, TimerKind::SubmitReset, reset_ms),
    ])
}

pub fn handle_submission_failed(state: &mut AppState, reason: String) -> UpdateResult {
    if !state.contact.fail() {
        return UpdateResult::none();
    }
    warn!("Contact submission failed: {}", reason);
    let description = format!("{}. {}", reason, FAILURE_DESCRIPTION);
    UpdateResult::action(raise_toast(
        state,
        ToastKind::Error,
        FAILURE_TITLE,
        &description,
    ))
}

/// The acknowledgement period is over; clear the form.
pub fn handle_submit_reset(state: &mut AppState) -> UpdateResult {
    if state.contact.reset() {
        state.focused_field = FormField::Name;
    }
    UpdateResult::none()
}
