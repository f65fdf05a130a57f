//! # Canonical Specification Documents
//!
//! Defines [`CanonicalSpec`], the parser-independent representation passed to
//! the validation strategies.
//!
//! ## Invariant
//!
//! The inner value is always a JSON object (mapping). The inner field is
//! private and the only constructor is [`CanonicalSpec::try_new`], which
//! rejects any other top-level shape, so downstream code never has to
//! re-check the document shape.

use serde_json::Value;

use crate::error::LoadSpecError;

/// A parsed, language-agnostic specification document.
///
/// Produced by the loader for the duration of one request; never cached or
/// shared across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSpec(Value);

impl CanonicalSpec {
    /// Wrap a parsed value, enforcing the top-level mapping invariant.
    ///
    /// # Errors
    ///
    /// Returns [`LoadSpecError::UnexpectedShape`] if the value is anything
    /// other than a JSON object.
    pub fn try_new(value: Value) -> Result<Self, LoadSpecError> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(LoadSpecError::UnexpectedShape {
                found: json_type_name(&value),
            })
        }
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the document and return the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Human-readable name of a JSON value's type, used in shape errors.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
