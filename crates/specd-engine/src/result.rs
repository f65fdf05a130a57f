//! # Validation Result Types
//!
//! The structured outcome shapes returned to API callers. Two forms exist:
//! the failure form `{result: {valid: false, reason}}` — produced both for
//! load failures and structurally invalid documents — and the success form,
//! which for managed checks carries per-model and per-property diagnostics.
//!
//! ## Invariant
//!
//! A failing [`CheckOutcome`] always carries a non-empty `reason`; a passing
//! one never carries a `reason` at all. The constructors are the only way
//! these are built, so the invariant holds by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a document (or one model, or one property) passed a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the check passed.
    pub valid: bool,
    /// Why the check failed. Present exactly when `valid` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckOutcome {
    /// A passing outcome.
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A failing outcome with a human-readable reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "failure outcomes must carry a reason");
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Diagnostic for a single property of a managed model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyResult {
    pub result: CheckOutcome,
}

/// Diagnostic for a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResult {
    pub result: CheckOutcome,
    /// Per-property diagnostics; managed checks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertyResult>>,
}

/// The full response of one validation run.
///
/// `BTreeMap` keeps model ordering deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub result: CheckOutcome,
    /// Per-model diagnostics; absent when the document never reached
    /// model-level checking (load failures, missing model section).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, ModelResult>>,
}

impl ValidationResponse {
    /// The uniform failure shape, used both for load failures and for
    /// documents rejected before any model was examined.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            result: CheckOutcome::invalid(reason),
            models: None,
        }
    }
}
