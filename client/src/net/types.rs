//! Request and response DTOs for the `/api/v1/user` endpoints.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON. Every field here carries the matching
//! serde rename so request bodies and decoded users stay lossless, including
//! server-defined user fields this client does not model.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the backend.
///
/// Only the fields the UI reads are typed. Anything else the server sends is
/// kept in `extra` so a user record is always replaced wholesale, never
/// partially rebuilt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// First and last name joined, falling back to the email.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// Successful response body: `{ user, token? }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Failure response body: `{ message }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `updatesetting`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
