//! Form-field validation.
//!
//! Validates submitted form values against a field specification: required
//! fields must be non-blank, and non-empty email/tel fields must parse as
//! [`Email`]/[`Phone`]. Empty optional fields pass. Validation is shallow and
//! client-side by design.

use std::collections::HashMap;

use brewhaven_core::{Email, EmailError, Phone, PhoneError};

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; only the required check applies.
    Text,
    /// Must parse as an email address when non-empty.
    Email,
    /// Must parse as a `(XXX) XXX-XXXX` phone number when non-empty.
    Tel,
}

/// One field in a form specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present and non-blank.
    #[must_use]
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// A field that may be left empty.
    #[must_use]
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }
}

/// A single validation failure, tagged with the field name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Missing {
        field: String,
    },
    /// An email field holds a malformed address.
    #[error("{field}: {source}")]
    InvalidEmail {
        field: String,
        source: EmailError,
    },
    /// A tel field holds a malformed phone number.
    #[error("{field}: {source}")]
    InvalidPhone {
        field: String,
        source: PhoneError,
    },
}

/// Validate `values` against `specs`, returning every issue found.
///
/// An empty result means the form is valid. Values are trimmed before any
/// check; a missing entry is treated the same as a blank one.
#[must_use]
pub fn validate(specs: &[FieldSpec], values: &HashMap<String, String>) -> Vec<FieldError> {
    let mut issues = Vec::new();

    for spec in specs {
        let value = values
            .get(&spec.name)
            .map(|v| v.trim())
            .unwrap_or_default();

        if value.is_empty() {
            if spec.required {
                issues.push(FieldError::Missing {
                    field: spec.name.clone(),
                });
            }
            continue;
        }

        match spec.kind {
            FieldKind::Text => {}
            FieldKind::Email => {
                if let Err(source) = Email::parse(value) {
                    issues.push(FieldError::InvalidEmail {
                        field: spec.name.clone(),
                        source,
                    });
                }
            }
            FieldKind::Tel => {
                if let Err(source) = Phone::parse(value) {
                    issues.push(FieldError::InvalidPhone {
                        field: spec.name.clone(),
                        source,
                    });
                }
            }
        }
    }

    issues
}
