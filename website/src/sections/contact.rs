use std::time::Duration;

use codewave_core::catalog::CONTACT_CHANNELS;
use codewave_core::{
    ContactFlow, FieldKind, FormField, Receipt, SectionId, SubmissionPhase, SubmitRejection,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use rand::Rng;

use super::SectionTitle;
use crate::page::{use_page, ToastKind};

/// Simulated network latency before the form counts as sent.
const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// The success state stays up this long before the form clears.
const RESET_AFTER: Duration = Duration::from_millis(3000);

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-slate-900 border text-white placeholder-slate-500 focus:outline-none focus:border-blue-500 disabled:opacity-50";

fn receipt_reference() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
    format!("CW-{}-{}", chrono::Local::now().format("%Y%m%d"), suffix)
}

#[component]
pub fn Contact() -> impl IntoView {
    let page = use_page();
    let flow = RwSignal::new(ContactFlow::new());

    // Pending submit/reset timeouts, cleared if the section goes away first
    let pending = StoredValue::new(Vec::<TimeoutHandle>::new());
    on_cleanup(move || {
        pending.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.clear();
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut outcome = Err(SubmitRejection::InFlight);
        flow.update(|f| outcome = f.begin_submit());

        match outcome {
            Ok(form) => {
                log::info!("submitting contact form from {}", form.email);
                after(
                    pending,
                    move || {
                        let mut completed = false;
                        flow.update(|f| completed = f.complete(Receipt::new(receipt_reference())));
                        if !completed {
                            return;
                        }
                        page.toast(
                            ToastKind::Success,
                            "Message sent successfully!",
                            "We'll get back to you within 24 hours.",
                        );
                        after(
                            pending,
                            move || {
                                flow.update(|f| {
                                    f.reset();
                                });
                            },
                            RESET_AFTER,
                        );
                    },
                    SUBMIT_DELAY,
                );
            }
            Err(SubmitRejection::Invalid(errors)) => {
                log::debug!("contact form rejected with {} field errors", errors.len());
                if let Some(first) = errors.first() {
                    focus_field(first.field);
                }
            }
            Err(rejection) => log::debug!("submit ignored: {:?}", rejection),
        }
    };

    let phase = move || flow.with(|f| f.phase());

    view! {
        <section id=SectionId::Contact.id() class="py-24 px-6 max-w-7xl mx-auto">
            <SectionTitle
                title="Let's Build Something Great"
                subtitle="Tell us about your project and we'll get back to you within 24 hours."
            />

            <div class="grid md:grid-cols-3 gap-12">
                <form class="md:col-span-2 grid sm:grid-cols-2 gap-4" on:submit=on_submit novalidate=true>
                    {FormField::ALL
                        .into_iter()
                        .map(|field| view! { <Field field=field flow=flow /> })
                        .collect_view()}

                    <div class="sm:col-span-2">
                        <button
                            type="submit"
                            class="w-full px-8 py-3 rounded-full font-bold text-white bg-gradient-to-r from-blue-500 to-purple-500 disabled:opacity-60"
                            disabled=move || flow.with(submit_disabled)
                        >
                            {move || match phase() {
                                SubmissionPhase::Idle => "Send Message",
                                SubmissionPhase::Submitting => "Sending...",
                                SubmissionPhase::Submitted => "Message Sent!",
                            }}
                        </button>
                        {move || {
                            flow.with(|f| {
                                f.receipt().map(|r| {
                                    let reference = r.reference.clone();
                                    view! {
                                        <p class="mt-4 text-center text-green-400 text-sm">
                                            "Thank you! Reference "{reference}
                                        </p>
                                    }
                                })
                            })
                        }}
                    </div>
                </form>

                <ul class="space-y-6">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <li>
                                    <p class="text-slate-500 text-sm">{channel.label}</p>
                                    {match channel.href {
                                        Some(href) => view! {
                                            <a href=href class="text-white hover:text-blue-300">{channel.value}</a>
                                        }
                                        .into_any(),
                                        None => view! { <p class="text-white">{channel.value}</p> }.into_any(),
                                    }}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

/// Run `f` after `delay`, remembering the handle so teardown can cancel it.
fn after(pending: StoredValue<Vec<TimeoutHandle>>, f: impl FnOnce() + 'static, delay: Duration) {
    match set_timeout_with_handle(f, delay) {
        Ok(handle) => pending.update_value(|handles| handles.push(handle)),
        Err(e) => log::error!("contact timeout failed: {:?}", e),
    }
}

/// The button stays disabled while a required field is blank or a request
/// is out.
fn submit_disabled(flow: &ContactFlow) -> bool {
    !flow.can_submit()
}

fn field_dom_id(field: FormField) -> String {
    format!("contact-{}", field.key())
}

fn focus_field(field: FormField) {
    use wasm_bindgen::JsCast;

    if let Some(element) = document()
        .get_element_by_id(&field_dom_id(field))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

#[component]
fn Field(field: FormField, flow: RwSignal<ContactFlow>) -> impl IntoView {
    let id = field_dom_id(field);
    let value = move || flow.with(|f| f.form().get(field).to_string());
    let error = move || flow.with(|f| f.error_for(field).map(|e| e.to_string()));
    let disabled = move || flow.with(|f| f.phase() != SubmissionPhase::Idle);
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        flow.update(|f| {
            f.set_field(field, text);
        });
    };
    let border = move || {
        if error().is_some() {
            format!("{} border-red-500", INPUT_CLASS)
        } else {
            format!("{} border-slate-800", INPUT_CLASS)
        }
    };
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let input_type = if field == FormField::Email { "email" } else { "text" };
    let control = match field.kind() {
        FieldKind::Text => view! {
            <input
                id=id.clone()
                type=input_type
                class=border
                prop:value=value
                disabled=disabled
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Select => view! {
            <select id=id.clone() class=border prop:value=value disabled=disabled on:change=on_input>
                <option value="">{format!("Select {}...", field.label().to_lowercase())}</option>
                {field
                    .options()
                    .iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::MultiLine => view! {
            <textarea id=id.clone() rows="5" class=border prop:value=value disabled=disabled on:input=on_input></textarea>
        }
        .into_any(),
    };

    let span = if field.kind() == FieldKind::MultiLine { "sm:col-span-2" } else { "" };

    view! {
        <label class=span for=id>
            <span class="block text-sm text-slate-300 mb-1">{label}</span>
            {control}
            {move || error().map(|e| view! { <p class="mt-1 text-xs text-red-400">"⚠ "{e}</p> })}
        </label>
    }
}
