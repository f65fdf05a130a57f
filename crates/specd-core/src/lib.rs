//! # specd-core — Specification Loading Pipeline
//!
//! The foundation of specd. This crate turns raw specification text in one of
//! several source languages into a [`CanonicalSpec`], the language-agnostic
//! in-memory form that every downstream validation strategy accepts.
//!
//! ## Pipeline
//!
//! ```text
//! raw text + LanguageTag → ParserRegistry::resolve → Parser::parse → CanonicalSpec
//! ```
//!
//! All failure modes of arbitrarily many parser back-ends collapse into one
//! error kind, [`LoadSpecError`]. Callers at the HTTP boundary handle exactly
//! one failure branch regardless of how many languages are registered; adding
//! a language means adding a registry entry, not new error handling upstream.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `specd-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Loading is deterministic and side-effect free.

pub mod canonical;
pub mod error;
pub mod loader;
pub mod parser;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalSpec;
pub use error::LoadSpecError;
pub use loader::load_spec;
pub use parser::{JsonParser, ParseError, Parser, YamlParser};
pub use registry::{LanguageTag, ParserRegistry};
