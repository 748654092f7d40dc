//! Message types for the application (TEA pattern)

use codewave_core::{CategoryFilter, FormField, Receipt, SectionBounds, SectionId, TechCategory};

use crate::input_key::InputKey;
use crate::timers::TimerKind;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the front-end
    Key(InputKey),

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    /// Kick off the startup timers (loader, hero rotation, first reveal)
    Start,

    /// A scheduled timer elapsed
    TimerFired { kind: TimerKind, generation: u64 },

    /// Skip the loader once the skip control is showing
    SkipLoader,

    // ─────────────────────────────────────────────────────────
    // Page Scrolling
    // ─────────────────────────────────────────────────────────
    /// Scroll by a signed number of rows
    ScrollBy(i32),
    /// Scroll to an absolute row
    ScrollTo(u32),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    /// Smooth-scroll equivalent: bring a section to the top of the viewport
    JumpToSection(SectionId),
    /// Terminal or window size changed
    ViewportResized { height: u32 },
    /// The front-end laid the page out and measured each section
    LayoutMeasured {
        bounds: Vec<SectionBounds>,
        content_height: u32,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation Menu
    // ─────────────────────────────────────────────────────────
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,

    // ─────────────────────────────────────────────────────────
    // Portfolio Filter
    // ─────────────────────────────────────────────────────────
    SelectCategory(CategoryFilter),
    NextCategory,
    PrevCategory,
    /// Focus the search box
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Replace the whole search string (headless, tests)
    SetSearch(String),
    /// Leave the search box, keeping its contents
    EndSearch,
    /// Reset category and search together
    ClearFilters,
    /// Show every project
    LoadMore,

    // ─────────────────────────────────────────────────────────
    // Technology Showcase
    // ─────────────────────────────────────────────────────────
    SelectTechCategory(TechCategory),
    NextTechCategory,
    PrevTechCategory,

    // ─────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────
    /// Focus the form (jumps to the contact section)
    EnterForm,
    ExitForm,
    FocusField(FormField),
    NextField,
    PrevField,
    /// Type into the focused field
    FieldInput(char),
    FieldBackspace,
    /// Replace a field's value outright
    SetField { field: FormField, value: String },
    /// Step the focused select field through its options
    CycleOption { forward: bool },
    SubmitContact,
    /// Transport acknowledged the submission
    SubmissionSucceeded(Receipt),
    /// Transport failed; the form keeps its contents
    SubmissionFailed(String),

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────
    DismissToast(u64),
}
