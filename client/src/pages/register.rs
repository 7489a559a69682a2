//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::api::HttpAuthApi;
use crate::net::types::RegisterForm;
use crate::pages::login::AFTER_LOGIN_PATH;
use crate::state::actions;
use crate::state::auth::Session;
use crate::util::cookie::BrowserCookie;
use crate::util::validation::FormErrors;

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterInput {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl RegisterInput {
    fn validate(self) -> Result<RegisterForm, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        errors.email("email", &self.email);
        errors.password("password", &self.password);
        errors.matches("confirmPassword", &self.password, &self.confirm_password);
        errors.into_result(RegisterForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    Effect::new(move || {
        if session.with(Session::has_user) {
            navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = RegisterInput {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match input.validate() {
            Ok(form) => {
                errors.set(FormErrors::default());
                leptos::task::spawn_local(async move {
                    let _ = actions::register(&HttpAuthApi, &session, &BrowserCookie, &form).await;
                });
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <div class="auth-form__row">
                        <TextField label="First Name" name="firstName" autocomplete="given-name" value=first_name errors=errors/>
                        <TextField label="Last Name" name="lastName" autocomplete="family-name" value=last_name errors=errors/>
                    </div>
                    <TextField label="Email" name="email" kind="email" autocomplete="email" value=email errors=errors/>
                    <TextField
                        label="Password"
                        name="password"
                        kind="password"
                        autocomplete="new-password"
                        value=password
                        errors=errors
                    />
                    <TextField
                        label="Confirm Password"
                        name="confirmPassword"
                        kind="password"
                        autocomplete="new-password"
                        value=confirm_password
                        errors=errors
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || session.with(Session::is_loading)>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
