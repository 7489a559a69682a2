use super::*;

fn form(first: &str, last: &str, email: &str) -> ProfileForm {
    ProfileForm { first_name: first.to_owned(), last_name: last.to_owned(), email: email.to_owned() }
}

// =============================================================
// Pre-population
// =============================================================

#[test]
fn from_user_copies_name_and_email() {
    let user = User {
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        ..User::default()
    };
    assert_eq!(ProfileForm::from_user(Some(&user)), form("Ada", "Lovelace", "a@b.com"));
}

#[test]
fn from_user_without_user_is_blank() {
    assert_eq!(ProfileForm::from_user(None), ProfileForm::default());
}

// =============================================================
// Submit gate
// =============================================================

#[test]
fn submit_disabled_while_either_name_is_empty() {
    for email in ["", "bad", "a@b.com"] {
        assert!(!form("", "", email).submit_enabled());
        assert!(!form("A", "", email).submit_enabled());
        assert!(!form("", "B", email).submit_enabled());
    }
}

#[test]
fn submit_enabled_with_both_names_even_if_email_invalid() {
    assert!(form("A", "B", "").submit_enabled());
    assert!(form("A", "B", "not-an-email").submit_enabled());
}

// =============================================================
// Schema
// =============================================================

#[test]
fn validate_reports_each_field() {
    let errors = form("", "", "").validate().unwrap_err();
    assert_eq!(errors.get("firstName"), Some("First name is required"));
    assert_eq!(errors.get("lastName"), Some("Last name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
}

#[test]
fn validate_rejects_invalid_email() {
    let errors = form("A", "B", "nope").validate().unwrap_err();
    assert_eq!(errors.get("email"), Some("Invalid email"));
    assert_eq!(errors.len(), 1);
}

// =============================================================
// plan_submit
// =============================================================

#[test]
fn plan_submit_dispatches_when_valid_and_authenticated() {
    assert_eq!(
        plan_submit(&form("A", "B", "a@b.com"), true),
        SubmitPlan::Dispatch(ProfileUpdate {
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            email: "a@b.com".to_owned(),
        })
    );
}

#[test]
fn plan_submit_refuses_when_unauthenticated() {
    assert_eq!(plan_submit(&form("A", "B", "a@b.com"), false), SubmitPlan::Unauthenticated);
}

#[test]
fn plan_submit_validates_before_checking_authentication() {
    assert!(matches!(plan_submit(&form("A", "B", "bad"), false), SubmitPlan::Invalid(_)));
    assert!(matches!(plan_submit(&form("A", "B", "bad"), true), SubmitPlan::Invalid(_)));
}
