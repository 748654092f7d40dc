use std::time::Duration;

use codewave_core::catalog::HERO_WORDS;
use codewave_core::{SectionId, WordRotator};
use leptos::prelude::*;

use crate::page::use_page;

const ROTATE_EVERY: Duration = Duration::from_millis(2000);

#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page();
    let rotator = RwSignal::new(WordRotator::new(HERO_WORDS));

    match set_interval_with_handle(
        move || {
            rotator.update(|r| {
                r.advance();
            })
        },
        ROTATE_EVERY,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("hero rotation failed to start: {:?}", e),
    }

    view! {
        <section id=SectionId::Home.id() class="pt-36 pb-24 px-6 text-center relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 flex flex-col items-center">
                <span class="mb-8 px-4 py-1 rounded-full border border-blue-800 bg-blue-900/30 text-blue-300 text-sm">
                    "✦ Welcome to the Future of Development"
                </span>

                <h1 class="text-5xl md:text-7xl font-black text-white tracking-tight mb-6">
                    "Building "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                        {move || rotator.with(|r| r.current())}
                    </span>
                    <br />
                    "Solutions"
                </h1>

                <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                    "Transform your ideas into powerful digital experiences with our premium full-stack development services. "
                    "We craft exceptional web and mobile applications that drive results."
                </p>

                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors"
                        on:click=move |_| page.go_to(SectionId::Contact)
                    >
                        "Start Your Project"
                    </button>
                    <button
                        class="px-8 py-3 bg-slate-800 text-white font-bold rounded-full border border-slate-700 hover:bg-slate-700 transition-colors"
                        on:click=move |_| page.go_to(SectionId::Portfolio)
                    >
                        "View Portfolio"
                    </button>
                </div>
            </div>
        </section>
    }
}
