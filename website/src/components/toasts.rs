use leptos::prelude::*;

use crate::page::{use_page, ToastKind};

#[component]
pub fn Toasts() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col space-y-2 w-80">
            <For
                each=move || page.toasts.get().into_iter().rev()
                key=|toast| toast.id
                children=|toast| {
                    let (class, icon) = match toast.kind {
                        ToastKind::Success => ("border-green-700 bg-green-950/90", "✓"),
                        ToastKind::Error => ("border-red-700 bg-red-950/90", "✗"),
                    };
                    view! {
                        <div class=format!("rounded-lg border px-4 py-3 shadow-lg {}", class)>
                            <p class="font-semibold text-white">{icon}" "{toast.title}</p>
                            <p class="text-sm text-slate-300">{toast.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
