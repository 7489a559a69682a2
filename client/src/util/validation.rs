//! Form validation primitives shared by the auth and settings pages.
//!
//! Each page builds its own schema from these checks; messages are collected
//! per field and only the first failing rule for a field is kept.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Shortest password accepted for registration and password changes.
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Same shape browsers use for <input type="email">.
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    /// Record `message` for `field` unless an earlier rule already failed.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no rule failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Required non-empty string.
    pub fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.is_empty() {
            self.insert(field, message);
        }
    }

    /// Required, syntactically valid email.
    pub fn email(&mut self, field: &'static str, value: &str) {
        if value.is_empty() {
            self.insert(field, "Email is required");
        } else if !is_valid_email(value) {
            self.insert(field, "Invalid email");
        }
    }

    /// Required password of at least [`MIN_PASSWORD_LEN`] characters.
    pub fn password(&mut self, field: &'static str, value: &str) {
        if value.is_empty() {
            self.insert(field, "Password is required");
        } else if value.chars().count() < MIN_PASSWORD_LEN {
            self.insert(field, "Password must be at least 6 characters");
        }
    }

    /// `confirm` must equal `original`.
    pub fn matches(&mut self, field: &'static str, original: &str, confirm: &str) {
        if confirm.is_empty() {
            self.insert(field, "Please confirm your password");
        } else if confirm != original {
            self.insert(field, "Passwords must match");
        }
    }
}
