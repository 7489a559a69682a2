//! Page title block.

use leptos::prelude::*;
use leptos::text_prop::TextProp;

#[component]
pub fn Header(#[prop(into)] title: String, #[prop(into)] subtitle: TextProp) -> impl IntoView {
    view! {
        <header class="page-header">
            <h2 class="page-header__title">{title}</h2>
            <p class="page-header__subtitle">{move || subtitle.get()}</p>
        </header>
    }
}
