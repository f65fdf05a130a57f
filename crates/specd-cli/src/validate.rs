//! # Validate Subcommand
//!
//! Offline validation of a specification file: the same load → dispatch
//! pipeline the HTTP service runs, printed as pretty JSON. The language tag
//! is inferred from the file extension unless `--language` is given.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use specd_core::{load_spec, LanguageTag, ParserRegistry};
use specd_engine::{dispatch, SchemaEngine, ValidationMode, ValidationResponse};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the specification file.
    pub file: PathBuf,

    /// Source language tag (e.g. YAML or JSON); inferred from the file
    /// extension when omitted.
    #[arg(long)]
    pub language: Option<String>,

    /// Check in unmanaged mode instead of managed.
    #[arg(long)]
    pub unmanaged: bool,
}

/// Run the validation and print the result.
///
/// Returns whether the document was valid, so the caller can pick the
/// process exit code. Load failures print in the same shape as engine
/// failures, exactly like the HTTP endpoints.
pub fn run(args: &ValidateArgs) -> anyhow::Result<bool> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    let tag = match &args.language {
        Some(language) => LanguageTag::new(language.clone()),
        None => infer_language(&args.file)?,
    };
    let mode = if args.unmanaged {
        ValidationMode::Unmanaged
    } else {
        ValidationMode::Managed
    };
    tracing::debug!(file = %args.file.display(), language = %tag, mode = %mode, "validating");

    let registry = ParserRegistry::with_defaults();
    let engine = SchemaEngine::new()?;

    let response = match load_spec(&registry, &text, &tag) {
        Ok(spec) => dispatch(&engine, mode, &spec),
        Err(err) => ValidationResponse::failure(err.to_string()),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.result.valid)
}

/// Map a file extension to its language tag.
fn infer_language(path: &Path) -> anyhow::Result<LanguageTag> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(LanguageTag::yaml()),
        Some("json") => Ok(LanguageTag::json()),
        other => anyhow::bail!(
            "cannot infer language from file extension {other:?}; pass --language"
        ),
    }
}
