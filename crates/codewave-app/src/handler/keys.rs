//! Key event handlers for different UI modes

use codewave_core::{FieldKind, SectionId};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.loader.is_visible() {
        return handle_key_loader(key);
    }

    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Search => handle_key_search(key),
        UiMode::Form => handle_key_form(state, key),
        UiMode::Menu => handle_key_menu(key),
    }
}

/// Handle key events while the loader overlay is up
fn handle_key_loader(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') | InputKey::Esc | InputKey::Enter => Some(Message::SkipLoader),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    let step = i32::try_from(state.settings.navigation.scroll_step.max(1)).unwrap_or(1);

    if let Some(index) = key.digit_index() {
        return SectionId::ALL.get(index).copied().map(Message::JumpToSection);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollBy(step)),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollBy(-step)),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        // Navigation
        InputKey::Char('m') => Some(Message::ToggleMenu),

        // Portfolio
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('c') => Some(Message::NextCategory),
        InputKey::Char('C') => Some(Message::PrevCategory),
        InputKey::Char('x') => Some(Message::ClearFilters),
        InputKey::Char('l') => Some(Message::LoadMore),

        // Technologies
        InputKey::Char('t') | InputKey::Tab => Some(Message::NextTechCategory),
        InputKey::Char('T') | InputKey::BackTab => Some(Message::PrevTechCategory),

        // Contact
        InputKey::Char('f') | InputKey::Enter => Some(Message::EnterForm),

        // Newest toast first
        InputKey::Char('d') => state.toasts.latest().map(|t| Message::DismissToast(t.id)),

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search(key: InputKey) -> Option<Message> {
    match key {
        // Keep the query, leave the box
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),
        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SetSearch(String::new())),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let on_select = state.focused_field.kind() == FieldKind::Select;

    match key {
        InputKey::Esc => Some(Message::ExitForm),
        InputKey::Tab | InputKey::Down => Some(Message::NextField),
        InputKey::BackTab | InputKey::Up => Some(Message::PrevField),
        InputKey::CharCtrl('s') => Some(Message::SubmitContact),

        InputKey::Left if on_select => Some(Message::CycleOption { forward: false }),
        InputKey::Right | InputKey::Char(' ') if on_select => {
            Some(Message::CycleOption { forward: true })
        }

        // Enter adds a newline in the message box and submits elsewhere
        InputKey::Enter => match state.focused_field.kind() {
            FieldKind::MultiLine => Some(Message::FieldInput('\n')),
            _ => Some(Message::SubmitContact),
        },

        InputKey::Backspace => Some(Message::FieldBackspace),
        InputKey::Char(c) if !on_select => Some(Message::FieldInput(c)),
        _ => None,
    }
}

fn handle_key_menu(key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return SectionId::ALL.get(index).copied().map(Message::JumpToSection);
    }

    match key {
        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::MenuDown),
        InputKey::Char('k') | InputKey::Up | InputKey::BackTab => Some(Message::MenuUp),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc | InputKey::Char('m') => Some(Message::ToggleMenu),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
