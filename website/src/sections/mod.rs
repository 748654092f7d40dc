mod about;
mod contact;
mod hero;
mod portfolio;
mod services;
mod technologies;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use services::Services;
pub use technologies::Technologies;

use leptos::prelude::*;

/// Section heading shared by everything below the hero.
#[component]
fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">{title}</h2>
            <p class="text-slate-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
