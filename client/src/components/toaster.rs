//! Toast host: turns session feedback into on-screen notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Whenever the session gains a `message` or `error`
//! the text is queued as a toast and the session field is cleared right away,
//! so the same text is never shown twice.

use leptos::prelude::*;

use crate::state::actions;
use crate::state::auth::Session;
use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(4);

/// Queue a toast and schedule its auto-dismiss.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, text: &str) {
    let mut id = None;
    toasts.update(|state| id = state.push(kind, text));

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(TOAST_LIFETIME).await;
                toasts.update(|state| state.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toaster() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || {
        let (message, error) = session.with(|s| (s.message.clone(), s.error.clone()));
        if let Some(message) = message {
            notify(toasts, ToastKind::Success, &message);
            actions::clear_message(&session);
        }
        if let Some(error) = error {
            notify(toasts, ToastKind::Error, &error);
            actions::clear_error(&session);
        }
    });

    view! {
        <div class="toaster toaster--top-right" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
