//! Field-level input validation.
//!
//! Handlers collect errors into a [`FieldErrors`] accumulator before any
//! write; a non-empty accumulator means nothing is persisted and the caller
//! gets the full list back in one response.

use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Accumulator for field-level validation failures.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// The field must be non-blank.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "This field is required");
        }
    }

    /// If present and non-blank, the value must look like an http(s) URL.
    pub fn url(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.trim().is_empty() && !is_valid_url(v) {
                self.push(field, "Must be a valid http:// or https:// URL");
            }
        }
    }

    /// If present and non-blank, the value must look like an email address.
    pub fn email(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.trim().is_empty() && !is_valid_email(v) {
                self.push(field, "Must be a valid email address");
            }
        }
    }

    /// The value must be one of the allowed strings.
    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.push(
                field,
                format!("Must be one of: {}", allowed.join(", ")),
            );
        }
    }

    /// Consume the accumulator: `Ok(())` if no failures were recorded.
    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Minimal URL well-formedness check: http(s) scheme plus a non-empty,
/// whitespace-free remainder.
pub fn is_valid_url(value: &str) -> bool {
    let v = value.trim();
    let rest = match v.strip_prefix("https://").or_else(|| v.strip_prefix("http://")) {
        Some(rest) => rest,
        None => return false,
    };
    !rest.is_empty() && !rest.chars().any(char::is_whitespace)
}

/// Minimal email well-formedness check: exactly one `@`, non-empty local
/// part, domain containing a dot, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let v = value.trim();
    if v.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = v.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
