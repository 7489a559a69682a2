//! Password change form.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::text_field::TextField;
use crate::net::api::HttpAuthApi;
use crate::net::types::PasswordUpdate;
use crate::state::actions;
use crate::state::auth::Session;
use crate::util::validation::FormErrors;

fn validate_password_change(old: &str, new: &str, confirm: &str) -> Result<PasswordUpdate, FormErrors> {
    let mut errors = FormErrors::default();
    errors.require("oldPassword", old, "Current password is required");
    errors.password("newPassword", new);
    if !old.is_empty() && old == new {
        errors.insert("newPassword", "New password must differ from the current one");
    }
    errors.matches("confirmPassword", new, confirm);
    errors.into_result(PasswordUpdate {
        old_password: old.to_owned(),
        new_password: new.to_owned(),
        confirm_password: confirm.to_owned(),
    })
}

#[component]
pub fn PasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_password_change(
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match checked {
            Ok(fields) => {
                errors.set(FormErrors::default());
                leptos::task::spawn_local(async move {
                    if actions::update_password(&HttpAuthApi, &session, &fields).await.is_ok() {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                });
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="settings-page">
            <div class="settings-card">
                <Header title="Password" subtitle="Change your password"/>
                <form class="settings-form" on:submit=on_submit novalidate=true>
                    <TextField
                        label="Current Password"
                        name="oldPassword"
                        kind="password"
                        autocomplete="current-password"
                        value=old_password
                        errors=errors
                    />
                    <TextField
                        label="New Password"
                        name="newPassword"
                        kind="password"
                        autocomplete="new-password"
                        value=new_password
                        errors=errors
                    />
                    <TextField
                        label="Confirm New Password"
                        name="confirmPassword"
                        kind="password"
                        autocomplete="new-password"
                        value=confirm_password
                        errors=errors
                    />
                    <div class="settings-form__actions">
                        <button
                            class="btn btn--primary btn--large"
                            type="submit"
                            disabled=move || session.with(Session::is_loading)
                        >
                            "Update Password"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
