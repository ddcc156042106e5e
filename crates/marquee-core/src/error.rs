//! # Validation Failure Report
//!
//! [`FieldErrors`] is the structured report a validator returns when a
//! candidate violates the schema: a mapping from field name to the kind of
//! violation and a human-readable reason, covering every violated field in
//! one pass. It serializes directly into the JSON body of a 400 response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kind of constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field was absent.
    Missing,
    /// The field was present with the wrong JSON type.
    WrongType,
    /// The value was the right type but outside its permitted range.
    OutOfRange,
    /// A value outside the fixed genre vocabulary.
    InvalidEnumValue,
    /// A poster value that is not a syntactically valid absolute URL.
    InvalidUrl,
}

impl FieldErrorKind {
    /// Return the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong_type",
            Self::OutOfRange => "out_of_range",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::InvalidUrl => "invalid_url",
        }
    }
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field's violation: its kind plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// The violated constraint.
    pub kind: FieldErrorKind,
    /// Human-readable reason, phrased for the API consumer.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The error for a required field that was absent.
    pub fn missing(field: &str) -> Self {
        Self::new(FieldErrorKind::Missing, format!("{field} is required"))
    }
}

/// Every violated field of a candidate, keyed by field name.
///
/// Ordered (`BTreeMap`) so reports and serialized bodies are
/// deterministic. One entry per field: for a list-valued field the first
/// offending element decides the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`, keeping the first one recorded if
    /// the field already has an entry.
    pub fn insert(&mut self, field: &str, error: FieldError) {
        self.0.entry(field.to_string()).or_insert(error);
    }

    /// Look up the violation recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    /// Whether any violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, error)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
