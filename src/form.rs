//! Field-level errors for password forms.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use crate::common::is_common_password;
use crate::evaluator::validate_password;

/// Fields of a set/reset-password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PasswordField {
    Password,
    Confirmation,
}

/// At most one message per field, keyed by a closed field enum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing any previous one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &F) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.errors.iter().map(|(f, m)| (f, m.as_str()))
    }
}

pub const COMMON_PASSWORD_MESSAGE: &str = "Password is too common";
pub const CONFIRMATION_MISSING_MESSAGE: &str = "Please confirm the password";
pub const CONFIRMATION_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Validates a password and its confirmation as entered in a form.
///
/// The password field gets the first failed rule message, or
/// [`COMMON_PASSWORD_MESSAGE`] when the rules pass but the password is on the
/// loaded common list.
pub fn validate_password_form(
    password: &SecretString,
    confirmation: &SecretString,
) -> FieldErrors<PasswordField> {
    let mut errors = FieldErrors::new();

    let report = validate_password(password);
    if let Some(first) = report.failed_messages.into_iter().next() {
        errors.insert(PasswordField::Password, first);
    } else if is_common_password(password.expose_secret()) {
        errors.insert(PasswordField::Password, COMMON_PASSWORD_MESSAGE);
    }

    let confirmation = confirmation.expose_secret();
    if confirmation.is_empty() {
        errors.insert(PasswordField::Confirmation, CONFIRMATION_MISSING_MESSAGE);
    } else if confirmation != password.expose_secret() {
        errors.insert(PasswordField::Confirmation, CONFIRMATION_MISMATCH_MESSAGE);
    }

    errors
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_field_errors_json_is_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert(PasswordField::Confirmation, CONFIRMATION_MISMATCH_MESSAGE);

        let json = serde_json::to_value(&errors).expect("errors should serialize");
        assert_eq!(
            json,
            serde_json::json!({ "confirmation": CONFIRMATION_MISMATCH_MESSAGE })
        );
    }
}
