//! # Language-Tagged Parser Registry
//!
//! Maps a [`LanguageTag`] to its [`Parser`]. The registry is populated once
//! at process start and is immutable afterwards — there is no runtime
//! registration path. Construct it explicitly and inject it into whatever
//! owns the request lifecycle; there is no ambient global instance.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::LoadSpecError;
use crate::parser::{JsonParser, Parser, YamlParser};

/// Identifier for the source syntax of a submitted document.
///
/// Opaque and exact-match: `"YAML"` and `"yaml"` are different tags, and an
/// absent or unregistered tag is an error, never a silent default.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Wrap a caller-supplied tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag for YAML documents.
    pub fn yaml() -> Self {
        Self("YAML".to_string())
    }

    /// The tag for JSON documents.
    pub fn json() -> Self {
        Self("JSON".to_string())
    }

    /// Return the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Immutable mapping from language tag to parser.
///
/// A `BTreeMap` keeps the supported-language list in a deterministic order
/// for error messages and logs.
pub struct ParserRegistry {
    parsers: BTreeMap<LanguageTag, Box<dyn Parser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Create a registry with the stock parsers: JSON and YAML.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(LanguageTag::json(), Box::new(JsonParser));
        registry.register(LanguageTag::yaml(), Box::new(YamlParser));
        registry
    }

    /// Register a parser for a tag. Intended for startup wiring only;
    /// the last registration for a tag wins.
    pub fn register(&mut self, tag: LanguageTag, parser: Box<dyn Parser>) {
        self.parsers.insert(tag, parser);
    }

    /// Look up the parser for a tag.
    ///
    /// # Errors
    ///
    /// Returns [`LoadSpecError::UnsupportedLanguage`] naming the tag and the
    /// registered languages if the tag is absent.
    pub fn resolve(&self, tag: &LanguageTag) -> Result<&dyn Parser, LoadSpecError> {
        self.parsers
            .get(tag)
            .map(|parser| parser.as_ref())
            .ok_or_else(|| LoadSpecError::UnsupportedLanguage {
                tag: tag.to_string(),
                supported: self.supported(),
            })
    }

    /// All registered tags, in sorted order.
    pub fn tags(&self) -> Vec<&LanguageTag> {
        self.parsers.keys().collect()
    }

    /// Render the registered tags for error messages, e.g. `"JSON and YAML"`.
    pub fn supported(&self) -> String {
        let tags: Vec<&str> = self.parsers.keys().map(|t| t.as_str()).collect();
        match tags.as_slice() {
            [] => "none".to_string(),
            [only] => (*only).to_string(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use serde_json::Value;

    #[test]
    fn with_defaults_registers_json_and_yaml() {
        let registry = ParserRegistry::with_defaults();
        assert!(registry.resolve(&LanguageTag::yaml()).is_ok());
        assert!(registry.resolve(&LanguageTag::json()).is_ok());
    }

    #[test]
    fn resolve_is_exact_match() {
        let registry = ParserRegistry::with_defaults();
        let err = registry.resolve(&LanguageTag::new("yaml")).unwrap_err();
        assert!(matches!(err, LoadSpecError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn unsupported_tag_error_lists_registered_languages() {
        let registry = ParserRegistry::with_defaults();
        let err = registry.resolve(&LanguageTag::new("cobol")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cobol"));
        assert!(msg.contains("JSON and YAML"));
    }

    #[test]
    fn supported_renders_by_count() {
        let mut registry = ParserRegistry::new();
        assert_eq!(registry.supported(), "none");

        registry.register(LanguageTag::json(), Box::new(JsonParser));
        assert_eq!(registry.supported(), "JSON");

        registry.register(LanguageTag::yaml(), Box::new(YamlParser));
        assert_eq!(registry.supported(), "JSON and YAML");

        #[derive(Debug)]
        struct Toml;
        impl Parser for Toml {
            fn parse(&self, _text: &str) -> Result<Value, ParseError> {
                Err(ParseError("unimplemented".to_string()))
            }
        }
        registry.register(LanguageTag::new("TOML"), Box::new(Toml));
        assert_eq!(registry.supported(), "JSON, TOML and YAML");
    }

    #[test]
    fn tags_are_sorted() {
        let registry = ParserRegistry::with_defaults();
        let tags: Vec<&str> = registry.tags().iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["JSON", "YAML"]);
    }
}
