use std::time::Duration;

use codewave_core::catalog::technologies_in;
use codewave_core::{LevelReveal, SectionId, TechCategory};
use leptos::prelude::*;

use super::SectionTitle;

/// Bars start at zero and grow after this delay.
const REVEAL_AFTER: Duration = Duration::from_millis(100);

#[component]
pub fn Technologies() -> impl IntoView {
    let reveal = RwSignal::new(LevelReveal::default());

    let select = move |category: TechCategory| {
        let mut changed = false;
        reveal.update(|r| changed = r.select(category));
        if changed {
            set_timeout(move || reveal.update(|r| r.reveal()), REVEAL_AFTER);
        }
    };
    select(TechCategory::default());

    let tab_class = move |category: TechCategory| {
        if reveal.with(|r| r.category() == category) {
            "px-5 py-2 rounded-full text-sm font-medium bg-gradient-to-r from-blue-500 to-purple-500 text-white"
        } else {
            "px-5 py-2 rounded-full text-sm font-medium bg-slate-800 text-slate-300 hover:bg-slate-700"
        }
    };

    view! {
        <section id=SectionId::Technologies.id() class="py-24 px-6 max-w-4xl mx-auto">
            <SectionTitle
                title="Technologies We Master"
                subtitle="The tools we reach for, and how well we know them."
            />

            <div class="flex flex-wrap justify-center gap-2 mb-10">
                {TechCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button class=move || tab_class(category) on:click=move |_| select(category)>
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-5">
                {move || {
                    technologies_in(reveal.with(|r| r.category()))
                        .map(|tech| {
                            let level = move || reveal.with(|r| r.displayed_level(tech));
                            view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="text-white font-medium">{tech.name}</span>
                                        <span class="text-slate-400 font-mono">{move || format!("{}%", level())}</span>
                                    </div>
                                    <div class="h-2 bg-slate-800 rounded-full overflow-hidden">
                                        <div
                                            class="h-full bg-gradient-to-r from-blue-500 to-purple-500 transition-all duration-1000"
                                            style:width=move || format!("{}%", level())
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
