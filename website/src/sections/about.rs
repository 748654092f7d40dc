use std::time::Duration;

use codewave_core::catalog::{MILESTONES, STATS, TEAM, VALUES};
use codewave_core::{SectionId, StatCounter};
use leptos::prelude::*;

use super::SectionTitle;
use crate::components::badge::Badge;
use crate::page::use_page;

const COUNTER_STEPS: u32 = 60;
const COUNTER_DURATION: Duration = Duration::from_millis(2000);

#[component]
pub fn About() -> impl IntoView {
    let page = use_page();
    let counters = RwSignal::new(
        STATS
            .iter()
            .map(|s| StatCounter::new(s.value, COUNTER_STEPS))
            .collect::<Vec<_>>(),
    );

    // Counters run once, the first time the section is on screen.
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let ready = !page.loader.with(|l| l.is_visible()) && page.is_visible(SectionId::About);
        if !ready {
            return false;
        }
        counters.update(|cs| {
            for c in cs.iter_mut() {
                c.start();
            }
        });
        start_counting(counters);
        true
    });

    view! {
        <section id=SectionId::About.id() class="py-24 px-6 max-w-7xl mx-auto">
            <SectionTitle
                title="About CodeWave"
                subtitle="A small senior team that ships products people love to use."
            />

            <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-16">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, stat)| {
                        view! {
                            <div class="text-center p-6 rounded-xl bg-slate-900/50 border border-slate-800">
                                <p class="text-4xl font-black text-white">
                                    {move || counters.with(|cs| cs.get(i).map(StatCounter::value).unwrap_or(0))}
                                    {stat.suffix}
                                </p>
                                <p class="text-slate-400 text-sm mt-1">{stat.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-12 mb-16">
                <div class="space-y-4">
                    {VALUES
                        .iter()
                        .map(|value| {
                            view! {
                                <div>
                                    <h3 class="text-lg font-bold text-white">{value.title}</h3>
                                    <p class="text-slate-400">{value.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <ol class="border-l border-slate-800 space-y-6 pl-6">
                    {MILESTONES
                        .iter()
                        .map(|milestone| {
                            view! {
                                <li>
                                    <span class="text-blue-400 font-mono text-sm">{milestone.year}</span>
                                    <h3 class="text-white font-bold">{milestone.title}</h3>
                                    <p class="text-slate-400 text-sm">{milestone.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                {TEAM
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="p-6 rounded-xl bg-slate-900/50 border border-slate-800">
                                <h3 class="text-lg font-bold text-white">{member.name}</h3>
                                <p class="text-blue-400 text-sm mb-2">{member.role}</p>
                                <p class="text-slate-400 text-sm mb-4">{member.bio}</p>
                                <div class="flex flex-wrap gap-2">
                                    {member.skills.iter().map(|skill| view! { <Badge>{*skill}</Badge> }).collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn start_counting(counters: RwSignal<Vec<StatCounter>>) {
    let step = COUNTER_DURATION / COUNTER_STEPS;
    let handle = StoredValue::new(None::<IntervalHandle>);

    let interval = set_interval_with_handle(
        move || {
            let mut done = true;
            counters.update(|cs| {
                for c in cs.iter_mut() {
                    done &= c.advance();
                }
            });
            if done {
                if let Some(h) = handle.get_value() {
                    h.clear();
                }
            }
        },
        step,
    );

    match interval {
        Ok(h) => handle.set_value(Some(h)),
        Err(e) => log::error!("counter interval failed: {:?}", e),
    }
}
