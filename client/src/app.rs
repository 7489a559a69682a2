//! Root component, router and SSR shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session: it restores the token cookie once, provides the
//! session and toast signals as context, and mounts the router. Every signed-in
//! page hangs off `AuthenticatedLayout`, which is the only route guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};

use crate::components::protected_route::AuthenticatedLayout;
use crate::components::toaster::Toaster;
use crate::net::api::HttpAuthApi;
use crate::pages::account::AccountPage;
use crate::pages::login::LoginPage;
use crate::pages::password::PasswordPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::state::actions;
use crate::state::auth::Session;
use crate::state::toast::ToastState;
use crate::util::cookie::{BrowserCookie, TokenStore};

/// HTML document rendered by the server around `App`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore(BrowserCookie.load()));
    provide_context(session);
    provide_context(RwSignal::new(ToastState::default()));

    // A restored token without a user: load the profile once.
    Effect::new(move || {
        if session.with_untracked(|s| s.is_authenticated() && !s.has_user()) {
            leptos::task::spawn_local(async move {
                let _ = actions::fetch_current_user(&HttpAuthApi, &session).await;
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Account Portal"/>
        <Router>
            <main class="portal">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("") view=AuthenticatedLayout>
                        <Route path=StaticSegment("") view=AccountPage/>
                        <Route path=StaticSegment("account") view=AccountPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                        <Route path=StaticSegment("password") view=PasswordPage/>
                    </ParentRoute>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
