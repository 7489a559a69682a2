//! Profile settings form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pre-filled from the session user when the page mounts. Submitting checks
//! the full schema, then the session's authentication, then dispatches
//! `update_profile`, blanks the form and moves to the account page without
//! waiting for the response; the toast host reports the outcome.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::text_field::TextField;
use crate::components::toaster::notify;
use crate::net::api::HttpAuthApi;
use crate::net::types::{ProfileUpdate, User};
use crate::state::actions;
use crate::state::auth::Session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validation::FormErrors;

pub const UNAUTHENTICATED_MESSAGE: &str = "You must be authenticated to update your profile.";

/// Where the form goes after dispatching an update.
pub const AFTER_UPDATE_PATH: &str = "/account";

/// Current values of the profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    /// Initial values: the user's fields, or blanks.
    pub fn from_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |u| Self {
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
        })
    }

    /// The button gate: both names typed. Email is not considered.
    pub fn submit_enabled(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// Full schema check.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any rule fails.
    pub fn validate(&self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        errors.email("email", &self.email);
        errors.into_result(ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        })
    }
}

/// What a submit attempt should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    Invalid(FormErrors),
    Unauthenticated,
    Dispatch(ProfileUpdate),
}

pub fn plan_submit(form: &ProfileForm, is_authenticated: bool) -> SubmitPlan {
    match form.validate() {
        Err(errors) => SubmitPlan::Invalid(errors),
        Ok(_) if !is_authenticated => SubmitPlan::Unauthenticated,
        Ok(fields) => SubmitPlan::Dispatch(fields),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let initial = session.with_untracked(|s| ProfileForm::from_user(s.user.as_ref()));
    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let errors = RwSignal::new(FormErrors::default());
    let leave = RwSignal::new(false);

    // Navigation runs from an effect so the submit handler stays `Copy`.
    Effect::new(move || {
        if leave.get() {
            navigate(AFTER_UPDATE_PATH, NavigateOptions::default());
        }
    });

    let current = move || ProfileForm { first_name: first_name.get(), last_name: last_name.get(), email: email.get() };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ProfileForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
        };
        match plan_submit(&form, session.with_untracked(Session::is_authenticated)) {
            SubmitPlan::Invalid(e) => errors.set(e),
            SubmitPlan::Unauthenticated => {
                errors.set(FormErrors::default());
                notify(toasts, ToastKind::Error, UNAUTHENTICATED_MESSAGE);
            }
            SubmitPlan::Dispatch(fields) => {
                errors.set(FormErrors::default());
                leptos::task::spawn_local(async move {
                    let _ = actions::update_profile(&HttpAuthApi, &session, &fields).await;
                });
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                leave.set(true);
            }
        }
    };

    view! {
        <Show
            when=move || !session.with(Session::is_loading)
            fallback=|| view! { <div class="spinner-page"><div class="spinner" aria-label="Loading"></div></div> }
        >
            <div class="settings-page">
                <div class="settings-card">
                    <Header title="Settings" subtitle="Update your settings"/>
                    <form class="settings-form" on:submit=on_submit novalidate=true>
                        <h3 class="settings-form__title">"Update Profile"</h3>
                        <TextField label="First Name" name="firstName" value=first_name errors=errors/>
                        <TextField label="Last Name" name="lastName" value=last_name errors=errors/>
                        <TextField label="Email" name="email" kind="email" value=email errors=errors/>
                        <div class="settings-form__actions">
                            <button
                                class="btn btn--primary btn--large"
                                type="submit"
                                disabled=move || !current().submit_enabled()
                            >
                                "Update Profile"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
