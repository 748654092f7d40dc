use codewave_core::catalog::COMPANY_NAME;
use codewave_core::LoaderStage;
use leptos::prelude::*;

use crate::page::use_page;
use crate::skip_loader;

#[component]
pub fn Loader() -> impl IntoView {
    let page = use_page();
    let progress = move || page.loader.with(|l| l.progress());

    view! {
        <Show when=move || page.loader.with(|l| l.is_visible())>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-950">
                <div class="w-full max-w-md px-8 text-center">
                    <h1 class="text-4xl font-black text-white tracking-tight mb-2">{COMPANY_NAME}</h1>
                    <p class="text-slate-400 mb-8">"Crafting Digital Excellence"</p>

                    <div class="h-2 w-full bg-slate-800 rounded-full overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-blue-500 to-purple-500 transition-all duration-200"
                            style:width=move || format!("{}%", progress())
                        ></div>
                    </div>
                    <p class="mt-2 text-sm font-mono text-slate-300">{move || format!("{}%", progress())}</p>

                    <ul class="mt-6 grid grid-cols-2 gap-2 text-left text-sm">
                        {LoaderStage::ALL
                            .into_iter()
                            .map(|stage| {
                                view! {
                                    <li class=move || {
                                        if stage.is_lit(progress()) { "text-blue-300" } else { "text-slate-600" }
                                    }>
                                        {move || if stage.is_lit(progress()) { "● " } else { "○ " }}
                                        {stage.label()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <Show when=move || page.loader.with(|l| l.skip_available())>
                        <button
                            class="mt-8 text-sm text-slate-400 hover:text-white underline transition-colors"
                            on:click=move |_| skip_loader(page)
                        >
                            "Skip to Site"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
