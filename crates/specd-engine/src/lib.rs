//! # specd-engine — Specification Validation Engine
//!
//! Consumes the [`CanonicalSpec`](specd_core::CanonicalSpec) produced by
//! `specd-core` and decides whether it describes a well-formed managed or
//! unmanaged specification.
//!
//! ## Two Strategies, One Entry Condition
//!
//! - **Managed** — the engine assumes full lifecycle responsibility for the
//!   described models (those declaring `x-tablename`). Success responses
//!   carry per-model and per-property diagnostics.
//! - **Unmanaged** — lifecycle responsibility is external; candidates are
//!   the models *without* `x-tablename` and diagnostics stop at model level.
//!
//! The rule set is embedded as JSON Schemas (Draft 2020-12) compiled once at
//! engine construction; see [`engine::SchemaEngine`].
//!
//! ## Crate Policy
//!
//! - Checks return a structured [`result::ValidationResponse`], never `Err`:
//!   an invalid document is a result, not an error. Engine-internal panics
//!   propagate — by contract, only load-time failures are normalized.
//! - No `unsafe` code; no `unwrap()` outside tests.

pub mod dispatch;
pub mod engine;
pub mod result;

// Re-export primary types for ergonomic imports.
pub use dispatch::{dispatch, ValidationMode};
pub use engine::{EngineError, SchemaEngine};
pub use result::{CheckOutcome, ModelResult, PropertyResult, ValidationResponse};
