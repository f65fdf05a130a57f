//! # Load Error Taxonomy
//!
//! A single error kind for every way loading a specification can fail.
//! The `Display` output of each variant is the human-readable `reason`
//! surfaced to API callers, so every message must stand on its own.

use thiserror::Error;

/// Error loading a specification from raw text.
///
/// Collapses the failure modes of all parser back-ends into one enum so that
/// callers above the loader need no language-specific handling. The rendered
/// message is always non-empty.
#[derive(Error, Debug)]
pub enum LoadSpecError {
    /// The language tag is not present in the parser registry.
    #[error("unsupported language {tag}, supported languages are {supported}")]
    UnsupportedLanguage {
        /// The tag the caller supplied.
        tag: String,
        /// Rendered list of registered tags, e.g. `"JSON and YAML"`.
        supported: String,
    },

    /// The text is not valid syntax for the selected language.
    #[error("{language} syntax error: {message}")]
    Syntax {
        /// The language whose parser rejected the text.
        language: String,
        /// The parser's own diagnostic.
        message: String,
    },

    /// The text parsed, but the top level is not a mapping.
    #[error("specification must be a mapping at the top level, found {found}")]
    UnexpectedShape {
        /// What the top level actually was ("sequence", "string", ...).
        found: &'static str,
    },
}
