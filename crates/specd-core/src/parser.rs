//! # Parser Back-Ends
//!
//! One [`Parser`] implementation per source language. Parsers turn raw text
//! into a plain `serde_json::Value` tree; the loader applies the top-level
//! shape check afterwards.
//!
//! YAML has a richer type system than JSON (tags, anchors, non-string map
//! keys), but specification documents use only the JSON-compatible subset.
//! [`YamlParser`] converts the YAML value tree into the equivalent JSON value
//! tree, rejecting anything outside that subset.

use serde_json::Value;
use thiserror::Error;

/// Diagnostic produced when a parser rejects its input.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ParseError(pub String);

/// A parsing function for one source language.
///
/// Implementations must be deterministic and side-effect free.
pub trait Parser: Send + Sync + std::fmt::Debug {
    /// Parse raw specification text into a JSON value tree.
    fn parse(&self, text: &str) -> Result<Value, ParseError>;
}

/// Parser for YAML documents.
#[derive(Debug, Default)]
pub struct YamlParser;

impl Parser for YamlParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| ParseError(e.to_string()))?;
        yaml_to_json_value(&yaml)
    }
}

/// Parser for JSON documents.
#[derive(Debug, Default)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        serde_json::from_str(text).map_err(|e| ParseError(e.to_string()))
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, ParseError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| ParseError(format!("cannot represent float {f} in JSON")))
            } else {
                Err(ParseError(format!("unsupported YAML number: {n:?}")))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, ParseError> =
                seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(ParseError(format!(
                            "unsupported YAML map key type: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => {
            // Ignore YAML tags, just convert the inner value.
            yaml_to_json_value(&tagged.value)
        }
    }
}
