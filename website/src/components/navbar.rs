use codewave_core::catalog::COMPANY_NAME;
use codewave_core::SectionId;
use leptos::prelude::*;

use crate::page::use_page;

fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-medium transition-colors text-white"
    } else {
        "text-sm font-medium transition-colors text-slate-400 hover:text-white"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let page = use_page();
    let active = move || page.tracker.with(|t| t.active());
    let scrolled = move || page.tracker.with(|t| t.scrolled());

    view! {
        <header class=move || {
            if scrolled() {
                "fixed top-0 left-0 right-0 z-40 bg-slate-950/80 backdrop-blur-md border-b border-slate-800 transition-colors"
            } else {
                "fixed top-0 left-0 right-0 z-40 bg-transparent border-b border-transparent transition-colors"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <button
                    class="font-bold text-white text-lg tracking-tight"
                    on:click=move |_| page.go_to(SectionId::Home)
                >
                    {COMPANY_NAME}
                </button>

                <nav class="hidden md:flex items-center space-x-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || link_class(active() == section)
                                    on:click=move |_| page.go_to(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <button
                    class="md:hidden text-slate-300"
                    aria-label="Toggle menu"
                    on:click=move |_| page.menu_open.update(|open| *open = !*open)
                >
                    {move || if page.menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || page.menu_open.get()>
                <nav class="md:hidden flex flex-col px-6 pb-4 space-y-3 bg-slate-950/95">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || link_class(active() == section)
                                    on:click=move |_| page.go_to(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
