//! Loader overlay lifecycle: startup, ticking, skip and dismissal

use std::time::Duration;

use codewave_core::{random_increment, LoaderStep};
use tracing::{debug, info};

use crate::state::AppState;
use crate::timers::TimerKind;

use super::helpers::{cancel, schedule_every, schedule_once};
use super::{navigation, UpdateResult};

/// Start every timer the page runs from first paint.
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    let mut actions = Vec::new();

    if state.loader.is_visible() {
        let loader = state.settings.loader.clone();
        actions.push(schedule_every(
            state,
            TimerKind::LoaderTick,
            Duration::from_millis(loader.tick_ms),
        ));
        actions.push(schedule_once(state, TimerKind::LoaderGrace, loader.skip_after_ms));
        actions.push(schedule_once(state, TimerKind::PageReady, loader.page_ready_ms));
    }

    let animation = state.settings.animation.clone();
    actions.push(schedule_every(
        state,
        TimerKind::HeroRotate,
        Duration::from_millis(animation.hero_rotate_ms),
    ));
    actions.push(schedule_once(state, TimerKind::TechReveal, animation.tech_reveal_ms));

    actions.extend(navigation::after_scroll(state));
    UpdateResult::actions(actions)
}

pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let settings = &state.settings.loader;
    let increment = random_increment(
        &mut rand::thread_rng(),
        settings.min_increment,
        settings.max_increment,
    );

    match state.loader.tick(increment) {
        LoaderStep::Continue => UpdateResult::none(),
        LoaderStep::Completed => {
            debug!("Loader reached 100%");
            let dismiss_ms = state.settings.loader.dismiss_ms;
            UpdateResult::actions(vec![
                cancel(state, TimerKind::LoaderTick),
                cancel(state, TimerKind::LoaderGrace),
                schedule_once(state, TimerKind::LoaderDismiss, dismiss_ms),
            ])
        }
        LoaderStep::Skipped | LoaderStep::Ignored => {
            UpdateResult::action(cancel(state, TimerKind::LoaderTick))
        }
    }
}

pub fn handle_grace_elapsed(state: &mut AppState) -> UpdateResult {
    if state.loader.enable_skip() {
        debug!("Loader skip available");
    }
    UpdateResult::none()
}

pub fn handle_skip(state: &mut AppState) -> UpdateResult {
    match state.loader.skip() {
        LoaderStep::Skipped => {
            info!("Loader skipped");
            let skip_dismiss_ms = state.settings.loader.skip_dismiss_ms;
            UpdateResult::actions(vec![
                cancel(state, TimerKind::LoaderTick),
                schedule_once(state, TimerKind::LoaderDismiss, skip_dismiss_ms),
            ])
        }
        _ => UpdateResult::none(),
    }
}

pub fn handle_dismiss(state: &mut AppState) -> UpdateResult {
    if !state.loader.dismiss() {
        return UpdateResult::none();
    }
    debug!("Loader dismissed");
    let mut actions = vec![cancel(state, TimerKind::PageReady)];
    actions.extend(navigation::after_scroll(state));
    UpdateResult::actions(actions)
}

/// The page is ready regardless of where the loader got to.
pub fn handle_page_ready(state: &mut AppState) -> UpdateResult {
    if !state.loader.force_finish() {
        return UpdateResult::none();
    }
    info!("Page ready ceiling reached, hiding loader");
    let mut actions = vec![
        cancel(state, TimerKind::LoaderTick),
        cancel(state, TimerKind::LoaderGrace),
        cancel(state, TimerKind::LoaderDismiss),
    ];
    actions.extend(navigation::after_scroll(state));
    UpdateResult::actions(actions)
}
