use codewave_core::catalog::{COMPANY_NAME, CONTACT_CHANNELS, COPYRIGHT, TAGLINE};
use codewave_core::SectionId;
use leptos::prelude::*;

use crate::page::use_page;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page();

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 grid md:grid-cols-3 gap-8 text-slate-500 text-sm">
                <div>
                    <p class="font-bold text-white text-lg mb-2">{COMPANY_NAME}</p>
                    <p>{TAGLINE}</p>
                </div>
                <nav class="flex flex-col space-y-2">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="text-left hover:text-white transition-colors"
                                    on:click=move |_| page.go_to(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <ul class="space-y-2">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <li>
                                    <span class="text-slate-400">{channel.label}": "</span>
                                    {match channel.href {
                                        Some(href) => {
                                            view! {
                                                <a href=href class="hover:text-white transition-colors">
                                                    {channel.value}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <span>{channel.value}</span> }.into_any(),
                                    }}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <p class="max-w-7xl mx-auto px-6 mt-8 text-center text-slate-600 text-xs">{COPYRIGHT}</p>
        </footer>
    }
}
