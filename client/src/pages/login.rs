//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::api::HttpAuthApi;
use crate::net::types::LoginCredentials;
use crate::state::actions;
use crate::state::auth::Session;
use crate::util::cookie::BrowserCookie;
use crate::util::validation::FormErrors;

/// Where a signed-in visitor lands.
pub const AFTER_LOGIN_PATH: &str = "/account";

fn validate_login(email: &str, password: &str) -> Result<LoginCredentials, FormErrors> {
    let mut errors = FormErrors::default();
    errors.email("email", email);
    errors.require("password", password, "Password is required");
    errors.into_result(LoginCredentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    // Leave as soon as a user is present, whether from this form or hydration.
    Effect::new(move || {
        if session.with(Session::has_user) {
            navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                errors.set(FormErrors::default());
                leptos::task::spawn_local(async move {
                    if actions::login(&HttpAuthApi, &session, &BrowserCookie, &credentials).await.is_ok() {
                        password.set(String::new());
                    }
                });
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <TextField label="Email" name="email" kind="email" autocomplete="email" value=email errors=errors/>
                    <TextField
                        label="Password"
                        name="password"
                        kind="password"
                        autocomplete="current-password"
                        value=password
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || session.with(Session::is_loading)>
                        {move || if session.with(Session::is_loading) { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
