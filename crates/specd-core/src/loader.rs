//! # Spec Loader
//!
//! Resolves the parser for a language tag, invokes it, and normalizes every
//! failure into [`LoadSpecError`]. This is the only entry point that produces
//! a [`CanonicalSpec`] from raw text.

use crate::canonical::CanonicalSpec;
use crate::error::LoadSpecError;
use crate::registry::{LanguageTag, ParserRegistry};

/// Load a specification from raw text in the language named by `tag`.
///
/// Fully deterministic given the same inputs; no side effects beyond parsing.
///
/// # Errors
///
/// - [`LoadSpecError::UnsupportedLanguage`] — `tag` is not registered.
/// - [`LoadSpecError::Syntax`] — the text is not valid for the language.
/// - [`LoadSpecError::UnexpectedShape`] — the text parsed but the top level
///   is not a mapping.
pub fn load_spec(
    registry: &ParserRegistry,
    text: &str,
    tag: &LanguageTag,
) -> Result<CanonicalSpec, LoadSpecError> {
    let parser = registry.resolve(tag)?;
    let value = parser.parse(text).map_err(|e| LoadSpecError::Syntax {
        language: tag.to_string(),
        message: e.to_string(),
    })?;
    CanonicalSpec::try_new(value)
}
