use codewave_core::catalog::PROJECTS;
use codewave_core::{
    category_counts, format_count, visible_tags, CategoryFilter, FilterState, PortfolioView,
    ProjectRecord, SectionId,
};
use leptos::prelude::*;

use super::SectionTitle;
use crate::components::badge::{Badge, BadgeColor};

const MAX_TAGS: usize = 3;

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 rounded-full text-sm font-medium bg-white text-black"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium bg-slate-800 text-slate-300 hover:bg-slate-700"
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());
    let results = Memo::new(move |_| filter.with(|f| PortfolioView::from_filter(f, PROJECTS)));
    let counts = category_counts(PROJECTS);

    let select = move |category: CategoryFilter| {
        filter.update(|f| f.category = category);
        log::debug!("portfolio category -> {}", category.id());
    };

    view! {
        <section id=SectionId::Portfolio.id() class="py-24 px-6 max-w-7xl mx-auto">
            <SectionTitle
                title="Our Portfolio"
                subtitle="A selection of products we have designed, built and shipped."
            />

            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8">
                <div class="flex flex-wrap gap-2">
                    {counts
                        .into_iter()
                        .map(|(category, count)| {
                            view! {
                                <button
                                    class=move || chip_class(filter.with(|f| f.category == category))
                                    on:click=move |_| select(category)
                                >
                                    {category.label()}" ("{count}")"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    placeholder="Search projects..."
                    class="w-full md:w-72 px-4 py-2 rounded-lg bg-slate-900 border border-slate-800 text-white placeholder-slate-500 focus:outline-none focus:border-blue-500"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        filter.update(|f| f.search = term);
                    }
                />
            </div>

            {move || match results.get() {
                PortfolioView::NoResults => {
                    view! {
                        <div class="text-center py-16">
                            <p class="text-slate-400 mb-4">"No projects found matching your criteria."</p>
                            <button
                                class="px-6 py-2 rounded-full bg-slate-800 text-white hover:bg-slate-700"
                                on:click=move |_| filter.update(|f| f.clear())
                            >
                                "Clear Filters"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                PortfolioView::Results { projects, show_load_more } => {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                        </div>
                        <Show when=move || show_load_more>
                            <div class="text-center mt-10">
                                <button
                                    class="px-8 py-3 rounded-full bg-slate-800 text-white font-bold border border-slate-700 hover:bg-slate-700"
                                    on:click=move |_| select(CategoryFilter::All)
                                >
                                    "Load More Projects"
                                </button>
                            </div>
                        </Show>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    let (tags, overflow) = visible_tags(project.tags, MAX_TAGS);

    view! {
        <article class="p-6 rounded-xl bg-slate-900/50 border border-slate-800 flex flex-col">
            <div class="flex items-start justify-between mb-2">
                <h3 class="text-lg font-bold text-white">{project.title}</h3>
                {project.featured.then(|| view! { <Badge color=BadgeColor::Yellow>"★ Featured"</Badge> })}
            </div>
            <p class="text-xs text-slate-500 mb-3">
                {project.client}" · "{project.date}" · "{project.category.label()}
            </p>
            <p class="text-slate-400 text-sm mb-4 flex-1">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {tags.iter().map(|tag| view! { <Badge>{*tag}</Badge> }).collect_view()}
                {(overflow > 0).then(|| view! { <Badge>{format!("+{}", overflow)}</Badge> })}
            </div>
            <div class="flex justify-between text-xs text-slate-500 border-t border-slate-800 pt-3">
                <span>"👁 "{format_count(project.metrics.views)}</span>
                <span>"♥ "{format_count(project.metrics.likes)}</span>
                <span>"💬 "{format_count(project.metrics.comments)}</span>
            </div>
            <div class="flex gap-3 mt-4 text-sm">
                <ProjectLink label="Live Demo" href=project.links.live />
                <ProjectLink label="Source" href=project.links.source />
            </div>
        </article>
    }
}

#[component]
fn ProjectLink(label: &'static str, href: Option<&'static str>) -> impl IntoView {
    match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener" class="text-blue-400 hover:text-blue-300">
                {label}
            </a>
        }
        .into_any(),
        None => view! { <span class="text-slate-600 cursor-not-allowed">{label}</span> }.into_any(),
    }
}
