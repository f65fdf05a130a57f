//! # Validation Dispatch
//!
//! Routes a canonical document to exactly one of the two validation
//! strategies. The mode is the only state involved; both strategies are
//! terminal and share nothing beyond their entry condition.

use specd_core::CanonicalSpec;

use crate::engine::SchemaEngine;
use crate::result::ValidationResponse;

/// Which validation strategy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// The engine owns the described resources' lifecycle.
    Managed,
    /// Lifecycle responsibility lies outside the engine.
    Unmanaged,
}

impl ValidationMode {
    /// Return the string representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Managed => "managed",
            Self::Unmanaged => "unmanaged",
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoke the strategy selected by `mode` on an already-loaded document.
///
/// Engine-internal failures are not caught here; they propagate to the
/// caller unchanged.
pub fn dispatch(
    engine: &SchemaEngine,
    mode: ValidationMode,
    spec: &CanonicalSpec,
) -> ValidationResponse {
    match mode {
        ValidationMode::Managed => engine.check_managed(spec),
        ValidationMode::Unmanaged => engine.check_unmanaged(spec),
    }
}
