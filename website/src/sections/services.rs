use codewave_core::catalog::SERVICES;
use codewave_core::SectionId;
use leptos::prelude::*;

use super::SectionTitle;
use crate::components::badge::{Badge, BadgeColor};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=SectionId::Services.id() class="py-24 px-6 max-w-7xl mx-auto">
            <SectionTitle
                title="Our Services"
                subtitle="End-to-end development from the first sketch to production."
            />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="p-6 rounded-xl bg-slate-900/50 border border-slate-800 hover:border-slate-700 transition-colors">
                                <h3 class="text-xl font-bold text-white mb-2">{service.title}</h3>
                                <p class="text-slate-400 mb-4">{service.description}</p>
                                <ul class="space-y-1 mb-4 text-sm text-slate-300">
                                    {service
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>"✓ "{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <div class="flex flex-wrap gap-2">
                                    {service
                                        .tech
                                        .iter()
                                        .map(|tech| view! { <Badge color=BadgeColor::Purple>{*tech}</Badge> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
