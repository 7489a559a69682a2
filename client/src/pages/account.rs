//! Account overview for the signed-in user.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos::text_prop::TextProp;
use leptos_router::components::A;

use crate::components::header::Header;
use crate::net::api::HttpAuthApi;
use crate::net::types::User;
use crate::state::actions;
use crate::state::auth::Session;
use crate::util::cookie::BrowserCookie;

fn field(user: Option<&User>, pick: fn(&User) -> &str) -> String {
    user.map(pick)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_owned()
}

/// Header subtitle that follows the session user.
fn signed_in_as(session: RwSignal<Session>) -> TextProp {
    TextProp::from(move || {
        let name = session.with(|s| s.user.as_ref().map(User::display_name).unwrap_or_default());
        format!("Signed in as {name}")
    })
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let first_name = move || session.with(|s| field(s.user.as_ref(), |u| u.first_name.as_str()));
    let last_name = move || session.with(|s| field(s.user.as_ref(), |u| u.last_name.as_str()));
    let email = move || session.with(|s| field(s.user.as_ref(), |u| u.email.as_str()));

    let on_refresh = move |_| {
        leptos::task::spawn_local(async move {
            let _ = actions::fetch_current_user(&HttpAuthApi, &session).await;
        });
    };
    let on_logout = move |_| actions::logout(&session, &BrowserCookie);

    view! {
        <div class="settings-page">
            <div class="settings-card">
                <Header title="Account" subtitle=signed_in_as(session)/>
                <dl class="account-details">
                    <dt>"First Name"</dt>
                    <dd>{first_name}</dd>
                    <dt>"Last Name"</dt>
                    <dd>{last_name}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </dl>
                <div class="settings-form__actions">
                    <A href="/settings" attr:class="btn">"Edit profile"</A>
                    <A href="/password" attr:class="btn">"Change password"</A>
                    <button class="btn" on:click=on_refresh disabled=move || session.with(Session::is_loading)>
                        "Reload"
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>"Log out"</button>
                </div>
            </div>
        </div>
    }
}
