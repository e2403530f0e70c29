use std::{fmt, path::PathBuf};

use mox_model::{BuildTag, DelayMs, Flag, MarkerKind};
use tracing::trace;

use crate::ExecError;

/// Internal configuration for one simulated training run.
#[derive(Debug, Clone)]
pub(crate) struct TrainTaskConfig {
    /// End-to-end log identifier.
    pub(crate) run_id: String,
    /// Output directory the marker is written into.
    pub(crate) model_dir: PathBuf,
    /// Build tag, embedded into stamp payloads.
    pub(crate) build: BuildTag,
    /// Payload kind.
    pub(crate) kind: MarkerKind,
    /// Simulated compute time.
    pub(crate) delay_ms: DelayMs,
    /// Whether the output directory tree is created before writing.
    pub(crate) ensure_dir: Flag,
}

impl TrainTaskConfig {
    /// Validate the configuration before the run starts.
    ///
    /// Rules:
    /// - `model_dir` is not empty.
    pub(crate) fn validate(&self) -> Result<(), ExecError> {
        if self.model_dir.as_os_str().is_empty() {
            return Err(ExecError::InvalidSpec("model directory is empty".into()));
        }
        Ok(())
    }

    /// Emit a trace-level log with the essential configuration fields.
    pub(crate) fn trace_state(&self) {
        trace!(
            task = %self.run_id,
            model_dir = %self.model_dir.display(),
            build = %self.build,
            kind = %self.kind,
            delay_ms = self.delay_ms,
            ensure_dir = self.ensure_dir.is_enabled(),
            "train config resolved"
        );
    }
}

impl fmt::Display for TrainTaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrainTaskConfig(dir='{}', build='{}', kind={}, delay_ms={}, ensure_dir={})",
            self.model_dir.display(),
            self.build,
            self.kind,
            self.delay_ms,
            self.ensure_dir.is_enabled(),
        )
    }
}

#[cfg(test)]
mod tests {
    use mox_model::{Flag, MarkerKind};

    use super::TrainTaskConfig;

    fn config(dir: &str) -> TrainTaskConfig {
        TrainTaskConfig {
            run_id: "train-42".into(),
            model_dir: dir.into(),
            build: "42".into(),
            kind: MarkerKind::Score,
            delay_ms: 10,
            ensure_dir: Flag::enabled(),
        }
    }

    #[test]
    fn validate_accepts_normal_directory() {
        assert!(config("/tmp/out").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_directory() {
        let err = config("").validate().unwrap_err();
        assert!(err.to_string().contains("model directory is empty"));
    }

    #[test]
    fn display_lists_the_essentials() {
        let text = config("/tmp/out").to_string();

        assert!(text.contains("dir='/tmp/out'"));
        assert!(text.contains("build='42'"));
        assert!(text.contains("kind=score"));
    }
}
