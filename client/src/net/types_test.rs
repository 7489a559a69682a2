use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "email": "a@b.com",
        "firstName": "Ada",
        "lastName": "Lovelace"
    }))
    .unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert!(user.extra.is_empty());
}

#[test]
fn user_missing_fields_default_to_empty() {
    let user: User = serde_json::from_value(serde_json::json!({ "firstName": "A" })).unwrap();
    assert_eq!(user.first_name, "A");
    assert_eq!(user.last_name, "");
    assert_eq!(user.email, "");
}

#[test]
fn user_keeps_server_defined_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "email": "a@b.com",
        "_id": "665f",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.extra.get("_id"), Some(&serde_json::json!("665f")));
    assert_eq!(user.extra.get("role"), Some(&serde_json::json!("admin")));

    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back["role"], "admin");
    assert_eq!(back["firstName"], "");
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: " Lovelace ".to_owned(),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User { email: "a@b.com".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "a@b.com");
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn auth_payload_token_is_optional() {
    let payload: AuthPayload =
        serde_json::from_value(serde_json::json!({ "user": { "firstName": "A" } })).unwrap();
    assert!(payload.token.is_none());
    assert_eq!(payload.user.unwrap().first_name, "A");
}

#[test]
fn auth_payload_accepts_empty_object() {
    let payload: AuthPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(payload, AuthPayload::default());
}

#[test]
fn error_body_reads_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Worng Password and Email"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Worng Password and Email"));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_form_serializes_camel_case() {
    let form = RegisterForm {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        serde_json::json!({
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.com",
            "password": "secret1"
        })
    );
}

#[test]
fn password_update_serializes_camel_case() {
    let body = PasswordUpdate {
        old_password: "old".to_owned(),
        new_password: "new123".to_owned(),
        confirm_password: "new123".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["oldPassword"], "old");
    assert_eq!(value["newPassword"], "new123");
    assert_eq!(value["confirmPassword"], "new123");
}
