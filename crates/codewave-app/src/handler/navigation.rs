//! Scroll, section jump and navigation menu handlers

use codewave_core::{SectionBounds, SectionId};
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::timers::TimerKind;

use super::helpers::schedule_every;
use super::{UpdateAction, UpdateResult};

/// Re-run everything that depends on the scroll position: the active nav
/// link, the scrolled header and the about-section counters.
pub fn after_scroll(state: &mut AppState) -> Vec<UpdateAction> {
    state.tracker.on_scroll(state.page.scroll, &state.page.bounds);
    start_counters_if_visible(state).into_iter().collect()
}

/// Counters run once, the first time the about section is on screen with
/// the loader out of the way.
fn start_counters_if_visible(state: &mut AppState) -> Option<UpdateAction> {
    if state.loader.is_visible()
        || state.counters_started()
        || !state.page.is_visible(SectionId::About)
    {
        return None;
    }
    debug!("About section visible, starting stat counters");
    for counter in &mut state.counters {
        counter.start();
    }
    let step = state.settings.animation.counter_step();
    Some(schedule_every(state, TimerKind::CounterStep, step))
}

fn scrolled(state: &mut AppState, changed: bool) -> UpdateResult {
    if changed {
        UpdateResult::actions(after_scroll(state))
    } else {
        UpdateResult::none()
    }
}

pub fn handle_scroll_by(state: &mut AppState, delta: i32) -> UpdateResult {
    let changed = state.page.scroll_by(delta);
    scrolled(state, changed)
}

pub fn handle_scroll_to(state: &mut AppState, row: u32) -> UpdateResult {
    let changed = state.page.set_scroll(row);
    scrolled(state, changed)
}

fn page_size(state: &AppState) -> i32 {
    i32::try_from(state.page.viewport.saturating_sub(1).max(1)).unwrap_or(i32::MAX)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let delta = -page_size(state);
    handle_scroll_by(state, delta)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let delta = page_size(state);
    handle_scroll_by(state, delta)
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    handle_scroll_to(state, 0)
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    let bottom = state.page.max_scroll();
    handle_scroll_to(state, bottom)
}

pub fn handle_jump_to_section(state: &mut AppState, section: SectionId) -> UpdateResult {
    if state.ui_mode == UiMode::Menu {
        state.ui_mode = UiMode::Browse;
    }
    match state.page.section_offset(section) {
        Some(offset) => {
            debug!("Jumping to {:?} at row {}", section, offset);
            handle_scroll_to(state, offset)
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_viewport_resized(state: &mut AppState, height: u32) -> UpdateResult {
    if state.page.viewport == height {
        return UpdateResult::none();
    }
    state.page.viewport = height;
    let scroll = state.page.scroll;
    state.page.set_scroll(scroll);
    UpdateResult::actions(after_scroll(state))
}

pub fn handle_layout_measured(
    state: &mut AppState,
    bounds: Vec<SectionBounds>,
    content_height: u32,
) -> UpdateResult {
    if state.page.bounds == bounds && state.page.content_height == content_height {
        return UpdateResult::none();
    }
    state.page.update_geometry(bounds, content_height);
    UpdateResult::actions(after_scroll(state))
}

// ─────────────────────────────────────────────────────────
// Navigation Menu
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Menu {
        state.ui_mode = UiMode::Browse;
    } else {
        state.ui_mode = UiMode::Menu;
        state.menu_index = state.tracker.active().index();
    }
    UpdateResult::none()
}

pub fn handle_menu_up(state: &mut AppState) -> UpdateResult {
    let len = SectionId::ALL.len();
    state.menu_index = (state.menu_index + len - 1) % len;
    UpdateResult::none()
}

pub fn handle_menu_down(state: &mut AppState) -> UpdateResult {
    state.menu_index = (state.menu_index + 1) % SectionId::ALL.len();
    UpdateResult::none()
}

pub fn handle_menu_select(state: &mut AppState) -> UpdateResult {
    let section = SectionId::ALL
        .get(state.menu_index)
        .copied()
        .unwrap_or_default();
    state.ui_mode = UiMode::Browse;
    UpdateResult::message(Message::JumpToSection(section))
}
