//! # Schema-Backed Validation Engine
//!
//! The concrete engine behind the `check(spec) -> result` contract. Models
//! live under the document's `components.schemas` section; a model carrying
//! `x-tablename` is **managed** (the engine owns its lifecycle and the table
//! it maps to), everything else is **unmanaged**.
//!
//! The rule set is expressed as JSON Schemas (Draft 2020-12) embedded in the
//! crate and compiled once at engine construction. Compilation failures are
//! startup errors; they can never surface on the request path. The one rule
//! JSON Schema cannot express — a managed model needs at least one
//! `x-primary-key` property — is enforced in code after schema validation.
//!
//! Engine-internal panics are deliberately not caught here or anywhere above;
//! only load-time errors are normalized into the uniform failure shape.

use std::collections::BTreeMap;

use jsonschema::Validator;
use serde_json::{Map, Value};
use thiserror::Error;

use specd_core::CanonicalSpec;

use crate::result::{CheckOutcome, ModelResult, PropertyResult, ValidationResponse};

const MANAGED_MODEL_SCHEMA: &str = include_str!("../schemas/managed-model.schema.json");
const UNMANAGED_MODEL_SCHEMA: &str = include_str!("../schemas/unmanaged-model.schema.json");
const MODEL_PROPERTY_SCHEMA: &str = include_str!("../schemas/model-property.schema.json");

/// Error constructing the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An embedded schema could not be parsed or compiled.
    #[error("schema compile error for '{schema_name}': {reason}")]
    SchemaCompile {
        /// Filename of the embedded schema.
        schema_name: String,
        /// Why parsing or compilation failed.
        reason: String,
    },
}

/// Validation engine backed by compiled JSON Schema validators.
///
/// `Send + Sync`; compiled validators are shared across request handlers
/// behind an `Arc`.
pub struct SchemaEngine {
    managed_model: Validator,
    unmanaged_model: Validator,
    model_property: Validator,
}

impl SchemaEngine {
    /// Compile the embedded schemas into a ready engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SchemaCompile`] if an embedded schema is not
    /// valid JSON or not a compilable JSON Schema.
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            managed_model: compile("managed-model.schema.json", MANAGED_MODEL_SCHEMA)?,
            unmanaged_model: compile("unmanaged-model.schema.json", UNMANAGED_MODEL_SCHEMA)?,
            model_property: compile("model-property.schema.json", MODEL_PROPERTY_SCHEMA)?,
        })
    }

    /// Check a specification in managed mode.
    ///
    /// The engine assumes full lifecycle responsibility for every model that
    /// declares `x-tablename`. Managed success responses carry per-model and
    /// per-property diagnostics.
    pub fn check_managed(&self, spec: &CanonicalSpec) -> ValidationResponse {
        let schemas = match model_schemas(spec) {
            Some(schemas) => schemas,
            None => {
                return ValidationResponse::failure(
                    "specification has no components.schemas section",
                )
            }
        };

        let mut models = BTreeMap::new();
        for (name, model) in schemas {
            if declares_tablename(model) {
                models.insert(name.clone(), self.check_managed_model(model));
            }
        }
        if models.is_empty() {
            return ValidationResponse::failure("no managed models found in specification");
        }
        summarize(models)
    }

    /// Check a specification in unmanaged mode.
    ///
    /// Lifecycle responsibility is assumed external: candidates are the
    /// `components.schemas` entries **without** `x-tablename`, and the
    /// diagnostics stop at model level.
    pub fn check_unmanaged(&self, spec: &CanonicalSpec) -> ValidationResponse {
        let schemas = match model_schemas(spec) {
            Some(schemas) => schemas,
            None => {
                return ValidationResponse::failure(
                    "specification has no components.schemas section",
                )
            }
        };

        let mut models = BTreeMap::new();
        for (name, model) in schemas {
            if !declares_tablename(model) {
                let result = match violations(&self.unmanaged_model, model) {
                    Some(reason) => CheckOutcome::invalid(reason),
                    None => CheckOutcome::valid(),
                };
                models.insert(
                    name.clone(),
                    ModelResult {
                        result,
                        properties: None,
                    },
                );
            }
        }
        if models.is_empty() {
            return ValidationResponse::failure("no unmanaged models found in specification");
        }
        summarize(models)
    }

    /// Validate one managed model and each of its properties.
    fn check_managed_model(&self, model: &Value) -> ModelResult {
        if let Some(reason) = violations(&self.managed_model, model) {
            return ModelResult {
                result: CheckOutcome::invalid(reason),
                properties: None,
            };
        }

        // The managed-model schema guarantees a non-empty properties object.
        let props = model
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let mut properties = BTreeMap::new();
        let mut failed = 0usize;
        let mut has_primary_key = false;
        for (name, prop) in &props {
            let result = match violations(&self.model_property, prop) {
                Some(reason) => {
                    failed += 1;
                    CheckOutcome::invalid(reason)
                }
                None => {
                    if prop.get("x-primary-key").and_then(Value::as_bool) == Some(true) {
                        has_primary_key = true;
                    }
                    CheckOutcome::valid()
                }
            };
            properties.insert(name.clone(), PropertyResult { result });
        }

        let result = if failed == 1 {
            CheckOutcome::invalid("1 property failed validation")
        } else if failed > 1 {
            CheckOutcome::invalid(format!("{failed} properties failed validation"))
        } else if !has_primary_key {
            CheckOutcome::invalid("no property with x-primary-key is defined")
        } else {
            CheckOutcome::valid()
        };

        ModelResult {
            result,
            properties: Some(properties),
        }
    }
}

impl std::fmt::Debug for SchemaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaEngine").finish_non_exhaustive()
    }
}

/// Compile one embedded schema.
fn compile(name: &str, source: &str) -> Result<Validator, EngineError> {
    let schema: Value = serde_json::from_str(source).map_err(|e| EngineError::SchemaCompile {
        schema_name: name.to_string(),
        reason: format!("invalid JSON: {e}"),
    })?;

    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&schema)
        .map_err(|e| EngineError::SchemaCompile {
            schema_name: name.to_string(),
            reason: e.to_string(),
        })
}

/// The `components.schemas` mapping, if the document has one.
fn model_schemas(spec: &CanonicalSpec) -> Option<&Map<String, Value>> {
    spec.get("components")?.get("schemas")?.as_object()
}

/// Whether a schema entry binds itself to a table.
fn declares_tablename(model: &Value) -> bool {
    model
        .as_object()
        .is_some_and(|m| m.contains_key("x-tablename"))
}

/// Render every violation of `instance` against `validator` as a single
/// reason line, or `None` when the instance conforms.
fn violations(validator: &Validator, instance: &Value) -> Option<String> {
    let rendered: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                format!("(root): {e}")
            } else {
                format!("{path}: {e}")
            }
        })
        .collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join("; "))
    }
}

/// Fold per-model results into the top-level outcome.
fn summarize(models: BTreeMap<String, ModelResult>) -> ValidationResponse {
    let failed: Vec<&str> = models
        .iter()
        .filter(|(_, model)| !model.result.valid)
        .map(|(name, _)| name.as_str())
        .collect();

    let result = if failed.is_empty() {
        CheckOutcome::valid()
    } else {
        CheckOutcome::invalid(format!(
            "{} of {} models failed validation: {}",
            failed.len(),
            models.len(),
            failed.join(", ")
        ))
    };

    ValidationResponse {
        result,
        models: Some(models),
    }
}
