use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Purple,
    Yellow,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Blue => "px-2 py-0.5 text-xs font-medium rounded border bg-blue-900/30 text-blue-300 border-blue-800",
            BadgeColor::Purple => "px-2 py-0.5 text-xs font-medium rounded border bg-purple-900/30 text-purple-300 border-purple-800",
            BadgeColor::Yellow => "px-2 py-0.5 text-xs font-medium rounded border bg-yellow-900/30 text-yellow-300 border-yellow-800",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
