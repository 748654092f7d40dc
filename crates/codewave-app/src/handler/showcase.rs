//! Hero rotation, technology showcase and stat counter handlers

use codewave_core::TechCategory;
use tracing::trace;

use crate::state::AppState;
use crate::timers::TimerKind;

use super::helpers::{cancel, schedule_once};
use super::UpdateResult;

pub fn handle_hero_rotate(state: &mut AppState) -> UpdateResult {
    let word = state.hero.advance();
    trace!("Hero word -> {}", word);
    UpdateResult::none()
}

/// Switching tabs zeroes the bars; they grow back after the reveal delay.
pub fn handle_select_tech(state: &mut AppState, category: TechCategory) -> UpdateResult {
    if !state.tech.select(category) {
        return UpdateResult::none();
    }
    let delay = state.settings.animation.tech_reveal_ms;
    UpdateResult::action(schedule_once(state, TimerKind::TechReveal, delay))
}

pub fn handle_next_tech(state: &mut AppState) -> UpdateResult {
    let next = state.tech.category().next();
    handle_select_tech(state, next)
}

pub fn handle_prev_tech(state: &mut AppState) -> UpdateResult {
    let prev = state.tech.category().prev();
    handle_select_tech(state, prev)
}

pub fn handle_tech_reveal(state: &mut AppState) -> UpdateResult {
    state.tech.reveal();
    UpdateResult::none()
}

pub fn handle_counter_step(state: &mut AppState) -> UpdateResult {
    let mut all_done = true;
    for counter in &mut state.counters {
        if counter.is_running() {
            counter.advance();
        }
        all_done &= !counter.is_running();
    }
    if all_done {
        UpdateResult::action(cancel(state, TimerKind::CounterStep))
    } else {
        UpdateResult::none()
    }
}
