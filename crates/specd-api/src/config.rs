//! # Configuration
//!
//! Environment-variable configuration read once at startup. The variables
//! and their defaults:
//!
//! | Variable                       | Default         |
//! |--------------------------------|-----------------|
//! | `STAGE`                        | `TEST`          |
//! | `PORT`                         | `8080`          |
//! | `SEEDS_FOLDER`                 | `assets/seeds`  |
//! | `DEFAULT_SEED_NAME`            | `default-seed`  |
//! | `ACCESS_CONTROL_ALLOW_ORIGIN`  | `*`             |
//! | `ACCESS_CONTROL_ALLOW_HEADERS` | `x-language`    |

use std::path::PathBuf;
use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

/// Error reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `STAGE` was set to something other than `TEST` or `PROD`.
    #[error("unsupported STAGE value: {0}")]
    UnknownStage(String),

    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// The stage the API is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Test,
    Prod,
}

impl Stage {
    /// Return the string representation of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "TEST",
            Self::Prod => "PROD",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEST" => Ok(Self::Test),
            "PROD" => Ok(Self::Prod),
            other => Err(ConfigError::UnknownStage(other.to_string())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The stage the application is running in.
    pub stage: Stage,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// The folder the seed store is hydrated from at startup.
    pub seeds_folder: PathBuf,
    /// The name of the default seed served at `/v1/seed`.
    pub default_seed_name: String,
    /// The CORS origin response value; `*` allows any origin.
    pub access_control_allow_origin: String,
    /// The CORS headers response value; `*` allows any header.
    pub access_control_allow_headers: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stage: Stage::Test,
            port: 8080,
            seeds_folder: PathBuf::from("assets/seeds"),
            default_seed_name: "default-seed".to_string(),
            access_control_allow_origin: "*".to_string(),
            access_control_allow_headers: "x-language".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value;
    /// the server refuses to start rather than guessing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let stage = match std::env::var("STAGE") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.stage,
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            stage,
            port,
            seeds_folder: std::env::var("SEEDS_FOLDER")
                .map(PathBuf::from)
                .unwrap_or(defaults.seeds_folder),
            default_seed_name: std::env::var("DEFAULT_SEED_NAME")
                .unwrap_or(defaults.default_seed_name),
            access_control_allow_origin: std::env::var("ACCESS_CONTROL_ALLOW_ORIGIN")
                .unwrap_or(defaults.access_control_allow_origin),
            access_control_allow_headers: std::env::var("ACCESS_CONTROL_ALLOW_HEADERS")
                .unwrap_or(defaults.access_control_allow_headers),
        })
    }

    /// Build the CORS layer from the configured origin and header lists.
    ///
    /// `*` maps to a wildcard; otherwise values are comma-separated lists.
    /// Entries that do not parse as header values are skipped with a warning
    /// so a single bad token cannot take the whole policy down.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any);

        let layer = if self.access_control_allow_origin.trim() == "*" {
            layer.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .access_control_allow_origin
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match HeaderValue::from_str(s) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = s, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        };

        if self.access_control_allow_headers.trim() == "*" {
            layer.allow_headers(Any)
        } else {
            let headers: Vec<HeaderName> = self
                .access_control_allow_headers
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match HeaderName::from_str(s) {
                    Ok(name) => Some(name),
                    Err(_) => {
                        tracing::warn!(header = s, "ignoring invalid CORS header");
                        None
                    }
                })
                .collect();
            layer.allow_headers(headers)
        }
    }
}
