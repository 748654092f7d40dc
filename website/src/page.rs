//! Page-wide state shared through Leptos context
//!
//! The loader, section tracker and toast list are read by several
//! components, so they live here rather than in any one section.

use std::time::Duration;

use codewave_core::{ProgressLoader, SectionBounds, SectionId, SectionTracker};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Probe offset below the viewport top used to pick the active section.
const LOOKAHEAD_PX: u32 = 100;
/// Header turns opaque past this many pixels.
const SCROLLED_PX: u32 = 50;
/// How long a toast stays up.
const TOAST_TTL: Duration = Duration::from_millis(4000);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: String,
}

#[derive(Clone, Copy)]
pub struct Page {
    pub loader: RwSignal<ProgressLoader>,
    pub tracker: RwSignal<SectionTracker>,
    pub menu_open: RwSignal<bool>,
    /// Sections with at least one pixel inside the viewport
    pub visible: RwSignal<Vec<SectionId>>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
    /// Loader progress interval, present while it runs
    loader_tick: StoredValue<Option<IntervalHandle>>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            loader: RwSignal::new(ProgressLoader::new()),
            tracker: RwSignal::new(SectionTracker::new(LOOKAHEAD_PX, SCROLLED_PX)),
            menu_open: RwSignal::new(false),
            visible: RwSignal::new(vec![SectionId::Home]),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(1),
            loader_tick: StoredValue::new(None),
        }
    }

    pub(crate) fn set_loader_tick(&self, handle: IntervalHandle) {
        self.loader_tick.set_value(Some(handle));
    }

    /// Clear the loader interval. Safe to call more than once.
    pub(crate) fn stop_loader_tick(&self) {
        if let Some(handle) = self.loader_tick.get_value() {
            handle.clear();
            self.loader_tick.set_value(None);
        }
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible.with(|v| v.contains(&section))
    }

    /// Show a toast and schedule its removal.
    pub fn toast(&self, kind: ToastKind, title: &'static str, description: impl Into<String>) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                kind,
                title,
                description: description.into(),
            })
        });

        let toasts = self.toasts;
        set_timeout(move || toasts.update(|t| t.retain(|x| x.id != id)), TOAST_TTL);
    }

    /// Re-measure sections against the current scroll position.
    pub fn on_scroll(&self) {
        let Some((scroll, viewport)) = scroll_metrics() else {
            return;
        };
        let bounds = measure_sections();
        self.tracker.update(|t| {
            t.on_scroll(scroll, &bounds);
        });
        self.visible.set(
            bounds
                .iter()
                .filter(|b| b.offset < scroll + viewport && b.offset + b.height > scroll)
                .map(|b| b.section)
                .collect(),
        );
    }

    /// Smooth-scroll to a section and close the mobile menu.
    pub fn go_to(&self, section: SectionId) {
        self.menu_open.set(false);
        let Some(offset) = measure_sections()
            .into_iter()
            .find(|b| b.section == section)
            .map(|b| b.offset)
        else {
            log::warn!("section #{} is not on the page", section.id());
            return;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(offset));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_page() -> Page {
    expect_context::<Page>()
}

fn scroll_metrics() -> Option<(u32, u32)> {
    let window = window();
    let scroll = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some((scroll.max(0.0) as u32, viewport.max(0.0) as u32))
}

/// Read each section's page offset and height from the DOM.
fn measure_sections() -> Vec<SectionBounds> {
    let document = document();
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                section,
                element.offset_top().max(0) as u32,
                element.offset_height().max(0) as u32,
            ))
        })
        .collect()
}
