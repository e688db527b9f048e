//! Error types for the Caritas Aeterna API client.
//!
//! Every failure the HTTP adapter can encounter is classified into exactly
//! one [`ApiError`] kind before it reaches a caller. The resource façade
//! passes these through unchanged, so pages can match on the kind to decide
//! user-visible behavior: redirect to login on [`ApiError::Auth`], bind
//! [`ValidationErrors`] to form fields, show a notice otherwise.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the API client.
///
/// Nothing is retried automatically: donation submissions are not idempotent,
/// so a retry must be an explicit, user-initiated action.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the server or no response came back,
    /// including request timeouts.
    #[error("network failure: {reason}")]
    Network {
        /// Transport-level description of the failure.
        reason: String,
    },

    /// HTTP 401 or 403: the session is invalid or lacks the required role.
    ///
    /// Classification only: receiving this error never clears the session
    /// store. Deciding to log the user out is the caller's responsibility.
    #[error("authentication failed (status {status})")]
    Auth {
        /// The HTTP status code (401 or 403).
        status: u16,
    },

    /// HTTP 422: the backend rejected the submitted fields.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// HTTP 5xx, an unmatched error status, or an undecodable payload.
    #[error("server error (status {status}): {message}")]
    Server {
        /// The HTTP status code, or the success status when the payload
        /// could not be decoded.
        status: u16,
        /// Raw body text or decode failure description.
        message: String,
    },
}

/// Field-keyed validation messages parsed from a 422 response body.
///
/// The backend reports `{"errors": {"email": ["Email is invalid"], ...}}`,
/// sometimes with bare strings instead of arrays, and sometimes only a
/// top-level `"message"`. All messages per field are retained;
/// [`ValidationErrors::first`] is the convenience accessor for binding a
/// single message to a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
    message: Option<String>,
}

impl ValidationErrors {
    /// Parse from a decoded 422 response body.
    ///
    /// Unrecognized shapes produce an empty map with no message; the error
    /// kind alone still tells the caller the submission was rejected.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Some(errors) = raw.get("errors").and_then(Value::as_object) {
            for (field, messages) in errors {
                let parsed = match messages {
                    Value::Array(list) => list
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect(),
                    Value::String(single) => vec![single.clone()],
                    _ => Vec::new(),
                };
                fields.insert(field.clone(), parsed);
            }
        }
        let message = raw
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { fields, message }
    }

    /// Build from a single free-form message with no field attribution.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            message: Some(message.into()),
        }
    }

    /// First message reported for `field`, if any.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// All messages reported for `field`.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Iterator over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Top-level message from the response, if the backend sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// `true` when neither field messages nor a top-level message exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.message.is_none()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(message) = &self.message {
            write!(f, "{message}")?;
            wrote = true;
        }
        for (field, messages) in &self.fields {
            if let Some(first) = messages.first() {
                if wrote {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {first}")?;
                wrote = true;
            }
        }
        if !wrote {
            write!(f, "invalid input")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_field_arrays() {
        let errors = ValidationErrors::from_value(&json!({
            "message": "The given data was invalid.",
            "errors": {
                "email": ["Email is invalid", "Email is taken"],
                "amount": ["Amount must be positive"]
            }
        }));
        assert_eq!(errors.first("email"), Some("Email is invalid"));
        assert_eq!(errors.messages("email").len(), 2);
        assert_eq!(errors.first("amount"), Some("Amount must be positive"));
        assert_eq!(errors.message(), Some("The given data was invalid."));
    }

    #[test]
    fn parses_bare_string_messages() {
        let errors = ValidationErrors::from_value(&json!({
            "errors": { "title": "Title is required" }
        }));
        assert_eq!(errors.first("title"), Some("Title is required"));
    }

    #[test]
    fn tolerates_unrecognized_shapes() {
        let errors = ValidationErrors::from_value(&json!(["not", "an", "object"]));
        assert!(errors.is_empty());
        assert_eq!(errors.first("email"), None);
        assert_eq!(errors.messages("email"), &[] as &[String]);
    }

    #[test]
    fn display_names_fields() {
        let errors = ValidationErrors::from_value(&json!({
            "errors": { "email": ["Email is invalid"] }
        }));
        let rendered = ApiError::Validation(errors).to_string();
        assert!(rendered.contains("email: Email is invalid"));
    }
}
