//! Portfolio filter handlers

use codewave_core::{CategoryFilter, SectionId};
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_select_category(state: &mut AppState, category: CategoryFilter) -> UpdateResult {
    if state.filter.category != category {
        debug!("Portfolio category -> {}", category.id());
        state.filter.category = category;
    }
    UpdateResult::none()
}

pub fn handle_next_category(state: &mut AppState) -> UpdateResult {
    let next = state.filter.category.next();
    handle_select_category(state, next)
}

pub fn handle_prev_category(state: &mut AppState) -> UpdateResult {
    let prev = state.filter.category.prev();
    handle_select_category(state, prev)
}

/// Focus the search box and bring the portfolio into view.
pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Search;
    UpdateResult::message(Message::JumpToSection(SectionId::Portfolio))
}

pub fn handle_search_input(state: &mut AppState, ch: char) -> UpdateResult {
    state.filter.search.push(ch);
    UpdateResult::none()
}

pub fn handle_search_backspace(state: &mut AppState) -> UpdateResult {
    state.filter.search.pop();
    UpdateResult::none()
}

pub fn handle_set_search(state: &mut AppState, search: String) -> UpdateResult {
    state.filter.search = search;
    UpdateResult::none()
}

pub fn handle_end_search(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    state.filter.clear();
    if state.ui_mode == UiMode::Search {
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::none()
}

/// "Load more" widens the category back to every project; the search stays.
pub fn handle_load_more(state: &mut AppState) -> UpdateResult {
    handle_select_category(state, CategoryFilter::All)
}
