use super::*;

#[test]
fn accepts_common_addresses() {
    for ok in ["a@b.com", "first.last+tag@sub.example.org", "x@localhost"] {
        assert!(is_valid_email(ok), "expected valid: {ok:?}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "plain", "@b.com", "a@", "a b@c.com", "a@-b.com", " a@b.com"] {
        assert!(!is_valid_email(bad), "expected invalid: {bad:?}");
    }
}

#[test]
fn first_failing_rule_wins() {
    let mut errors = FormErrors::default();
    errors.insert("email", "Email is required");
    errors.insert("email", "Invalid email");
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn email_rule_distinguishes_missing_and_invalid() {
    let mut errors = FormErrors::default();
    errors.email("a", "");
    errors.email("b", "nope");
    errors.email("c", "ok@b.com");
    assert_eq!(errors.get("a"), Some("Email is required"));
    assert_eq!(errors.get("b"), Some("Invalid email"));
    assert_eq!(errors.get("c"), None);
}

#[test]
fn password_rule_enforces_minimum_length() {
    let mut errors = FormErrors::default();
    errors.password("short", "12345");
    errors.password("exact", "123456");
    errors.password("missing", "");
    assert_eq!(errors.get("short"), Some("Password must be at least 6 characters"));
    assert_eq!(errors.get("exact"), None);
    assert_eq!(errors.get("missing"), Some("Password is required"));
}

#[test]
fn matches_rule() {
    let mut errors = FormErrors::default();
    errors.matches("blank", "secret1", "");
    errors.matches("diff", "secret1", "secret2");
    errors.matches("same", "secret1", "secret1");
    assert_eq!(errors.get("blank"), Some("Please confirm your password"));
    assert_eq!(errors.get("diff"), Some("Passwords must match"));
    assert_eq!(errors.get("same"), None);
}

#[test]
fn into_result_only_errs_when_something_failed() {
    assert_eq!(FormErrors::default().into_result(7), Ok(7));
    let mut errors = FormErrors::default();
    errors.require("firstName", "", "First name is required");
    assert!(errors.clone().into_result(()).is_err());
}
