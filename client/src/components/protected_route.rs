//! Route guard for views that need a signed-in user.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet, Redirect};

use crate::state::actions;
use crate::state::auth::Session;
use crate::util::auth::{GuardDecision, guard_decision};
use crate::util::cookie::BrowserCookie;

/// Render `children` (or the nested route's `Outlet`) when `user` is true,
/// otherwise redirect to `redirect` (default `/login`).
#[component]
pub fn ProtectedRoute(
    #[prop(into)] user: Signal<bool>,
    #[prop(optional, into)] redirect: Option<String>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    move || match guard_decision(user.get(), redirect.as_deref()) {
        GuardDecision::Render => match &children {
            Some(children) => children().into_any(),
            None => view! { <Outlet/> }.into_any(),
        },
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Whether the session has a user, notifying only when that answer flips.
///
/// The guard re-renders its children on every notification, so it must not
/// follow `Pending` / `Rejected` / clear events that leave the user in place.
pub fn user_present(session: RwSignal<Session>) -> Memo<bool> {
    Memo::new(move |_| session.with(Session::has_user))
}

/// Parent-route view for every signed-in page: nav bar plus the nested route.
#[component]
pub fn AuthenticatedLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let has_user = user_present(session);

    let on_logout = move |_| actions::logout(&session, &BrowserCookie);

    view! {
        <ProtectedRoute user=has_user>
            <nav class="portal-nav">
                <A href="/account">"Account"</A>
                <A href="/settings">"Settings"</A>
                <A href="/password">"Password"</A>
                <button class="btn btn--link" on:click=on_logout>"Log out"</button>
            </nav>
            <Outlet/>
        </ProtectedRoute>
    }
}
