use std::path::PathBuf;

use thiserror::Error;

use mox_model::{MarkerKind, ModelError};

/// Required: filesystem path of the output directory.
pub const ENV_MODEL_FOLDER: &str = "MODELFOLDER";
/// Required: opaque label of the triggering build.
pub const ENV_BUILD_NUMBER: &str = "BUILDNUMBER";
/// Optional: marker kind, `stamp` or `score` (the default).
pub const ENV_MARKER_KIND: &str = "MOX_MARKER";
/// Optional: logger filter expression, default `info`.
pub const ENV_LOG_LEVEL: &str = "MOX_LOG";
/// Optional: logger output format, `text` (default) or `json`.
pub const ENV_LOG_FORMAT: &str = "MOX_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid {var} value {value:?}: {source}")]
    InvalidMarkerKind {
        var: &'static str,
        value: String,
        source: ModelError,
    },
}

/// Run parameters resolved from the process environment.
///
/// The two required values have no defaults; a missing one fails the run
/// before any filesystem side effect.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub model_dir: PathBuf,
    pub build: String,
    pub marker: MarkerKind,
}

impl RunConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary lookup.
    ///
    /// Tests pass closures over maps here, so the process environment never
    /// has to be mutated.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_dir = lookup(ENV_MODEL_FOLDER).ok_or(ConfigError::MissingVar(ENV_MODEL_FOLDER))?;
        let build = lookup(ENV_BUILD_NUMBER).ok_or(ConfigError::MissingVar(ENV_BUILD_NUMBER))?;

        let marker = match lookup(ENV_MARKER_KIND) {
            Some(raw) => {
                raw.parse::<MarkerKind>()
                    .map_err(|source| ConfigError::InvalidMarkerKind {
                        var: ENV_MARKER_KIND,
                        value: raw,
                        source,
                    })?
            }
            None => MarkerKind::default(),
        };

        Ok(Self {
            model_dir: PathBuf::from(model_dir),
            build,
            marker,
        })
    }
}
