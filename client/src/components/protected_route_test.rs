use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::reactive::effect::ImmediateEffect;

use super::*;
use crate::net::api::AuthOp;
use crate::net::types::User;
use crate::state::auth::AuthEvent;

fn signed_in() -> RwSignal<Session> {
    let mut session = Session::restore(Some("t1".to_owned()));
    session.user = Some(User { first_name: "A".to_owned(), ..User::default() });
    RwSignal::new(session)
}

/// Count how many times a reader of `has_user` is notified.
fn watch(has_user: Memo<bool>) -> (Arc<AtomicUsize>, ImmediateEffect) {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let effect = ImmediateEffect::new(move || {
        has_user.get();
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (runs, effect)
}

#[test]
fn user_present_ignores_events_that_keep_the_user() {
    let session = signed_in();
    let has_user = user_present(session);
    let (runs, _effect) = watch(has_user);
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    actions::clear_message(&session);
    session.update(|s| s.apply(AuthEvent::Pending(AuthOp::UpdatePassword)));
    session.update(|s| s.apply(AuthEvent::Rejected(AuthOp::UpdatePassword, "bad".to_owned())));
    actions::clear_error(&session);

    assert!(has_user.get_untracked());
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn user_present_notifies_when_user_leaves() {
    let session = signed_in();
    let has_user = user_present(session);
    let (runs, _effect) = watch(has_user);

    session.update(|s| s.apply(AuthEvent::Logout));

    assert!(!has_user.get_untracked());
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}
