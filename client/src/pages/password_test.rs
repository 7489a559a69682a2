use super::*;

#[test]
fn accepts_valid_change() {
    let update = validate_password_change("oldpass", "newpass1", "newpass1").unwrap();
    assert_eq!(update.old_password, "oldpass");
    assert_eq!(update.new_password, "newpass1");
    assert_eq!(update.confirm_password, "newpass1");
}

#[test]
fn requires_current_password() {
    let errors = validate_password_change("", "newpass1", "newpass1").unwrap_err();
    assert_eq!(errors.get("oldPassword"), Some("Current password is required"));
}

#[test]
fn new_password_must_differ() {
    let errors = validate_password_change("samepass", "samepass", "samepass").unwrap_err();
    assert_eq!(errors.get("newPassword"), Some("New password must differ from the current one"));
}

#[test]
fn length_rule_reported_before_sameness() {
    let errors = validate_password_change("abc", "abc", "abc").unwrap_err();
    assert_eq!(errors.get("newPassword"), Some("Password must be at least 6 characters"));
}

#[test]
fn confirmation_must_match() {
    let errors = validate_password_change("oldpass", "newpass1", "newpass2").unwrap_err();
    assert_eq!(errors.get("confirmPassword"), Some("Passwords must match"));
    assert_eq!(errors.len(), 1);
}
