//! Helper functions for handlers

use std::time::Duration;

use crate::state::AppState;
use crate::timers::{TimerKind, TimerSpec};
use crate::toast::ToastKind;

use super::UpdateAction;

/// Arm a one-shot timer and return the action that starts it.
pub fn schedule_once(state: &mut AppState, kind: TimerKind, delay_ms: u64) -> UpdateAction {
    schedule(state, kind, Duration::from_millis(delay_ms), false)
}

/// Arm a repeating timer and return the action that starts it.
pub fn schedule_every(state: &mut AppState, kind: TimerKind, period: Duration) -> UpdateAction {
    schedule(state, kind, period, true)
}

fn schedule(state: &mut AppState, kind: TimerKind, delay: Duration, repeat: bool) -> UpdateAction {
    let generation = state.timers.arm(kind);
    UpdateAction::ScheduleTimer(TimerSpec {
        kind,
        generation,
        delay,
        repeat,
    })
}

/// Disarm a timer and return the action that aborts its task.
pub fn cancel(state: &mut AppState, kind: TimerKind) -> UpdateAction {
    state.timers.disarm(kind);
    UpdateAction::CancelTimer(kind)
}

/// Queue a toast and schedule its expiry.
pub fn raise_toast(
    state: &mut AppState,
    kind: ToastKind,
    title: &str,
    description: &str,
) -> UpdateAction {
    let id = state.toasts.push(kind, title, description);
    let ttl = state.settings.ui.toast_ttl_ms;
    schedule_once(state, TimerKind::ToastExpire(id), ttl)
}
