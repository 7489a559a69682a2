use super::*;

#[test]
fn validate_login_accepts_valid_input() {
    assert_eq!(
        validate_login("a@b.com", "x"),
        Ok(LoginCredentials { email: "a@b.com".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn validate_login_rejects_malformed_email() {
    let errors = validate_login("not-an-email", "x").unwrap_err();
    assert_eq!(errors.get("email"), Some("Invalid email"));
    assert_eq!(errors.get("password"), None);
}
