//! Labelled input bound to a string signal, with its validation message.

use leptos::prelude::*;

use crate::util::validation::FormErrors;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(name));

    view! {
        <label class="field" class:field--invalid=move || message().is_some()>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                name=name
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || message().map(|m| view! { <p class="field__error">{m}</p> })}
        </label>
    }
}
