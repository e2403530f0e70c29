use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{BuildTag, DEFAULT_DELAY_MS, DelayMs, Flag},
    kind::MarkerKind,
};

/// Declarative specification of one simulated training run.
///
/// `TrainSpec` describes *what* the run should produce and *where*; the
/// runner in `mox-exec` turns it into the actual delay, marker computation
/// and file write.
///
/// Fields cover:
/// - output placement (`model_dir`, `ensure_dir`)
/// - the payload (`kind`, `build`)
/// - timing (`delay_ms`)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSpec {
    /// Output directory the marker file is written into.
    pub model_dir: PathBuf,
    /// Build tag of the triggering build.
    ///
    /// Embedded verbatim into stamp markers; score markers only log it.
    pub build: BuildTag,
    /// Which payload to write.
    #[serde(default)]
    pub kind: MarkerKind,
    /// Simulated compute time before the marker is written.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: DelayMs,
    /// Whether the run creates the output directory tree first.
    ///
    /// Enabled runs call `create_dir_all` and succeed if the directory
    /// already exists; disabled runs require the directory to be present
    /// and fail the file write otherwise.
    #[serde(default)]
    pub ensure_dir: Flag,
}

fn default_delay_ms() -> DelayMs {
    DEFAULT_DELAY_MS
}

impl TrainSpec {
    /// Spec for a score run: random payload, output directory created on
    /// demand. This is the current shape of the job.
    pub fn score(model_dir: impl Into<PathBuf>, build: impl Into<BuildTag>) -> Self {
        Self {
            model_dir: model_dir.into(),
            build: build.into(),
            kind: MarkerKind::Score,
            delay_ms: DEFAULT_DELAY_MS,
            ensure_dir: Flag::enabled(),
        }
    }

    /// Spec for a legacy stamp run: timestamp payload, output directory
    /// expected to exist already.
    pub fn stamp(model_dir: impl Into<PathBuf>, build: impl Into<BuildTag>) -> Self {
        Self {
            model_dir: model_dir.into(),
            build: build.into(),
            kind: MarkerKind::Stamp,
            delay_ms: DEFAULT_DELAY_MS,
            ensure_dir: Flag::disabled(),
        }
    }

    /// Override the simulated compute time.
    ///
    /// This is a builder-style helper:
    ///
    /// ```rust
    /// use mox_model::TrainSpec;
    ///
    /// let spec = TrainSpec::score("/tmp/out", "42").with_delay_ms(10);
    /// assert_eq!(spec.delay_ms, 10);
    /// ```
    pub fn with_delay_ms(mut self, delay_ms: DelayMs) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{DEFAULT_DELAY_MS, Flag, MarkerKind};

    use super::TrainSpec;

    #[test]
    fn score_constructor_creates_directory_on_demand() {
        let spec = TrainSpec::score("/data/models", "b-17");

        assert_eq!(spec.model_dir, PathBuf::from("/data/models"));
        assert_eq!(spec.build, "b-17");
        assert_eq!(spec.kind, MarkerKind::Score);
        assert_eq!(spec.delay_ms, DEFAULT_DELAY_MS);
        assert!(spec.ensure_dir.is_enabled());
    }

    #[test]
    fn stamp_constructor_expects_existing_directory() {
        let spec = TrainSpec::stamp("/data/models", "b-17");

        assert_eq!(spec.kind, MarkerKind::Stamp);
        assert!(spec.ensure_dir.is_disabled());
    }

    #[test]
    fn with_delay_ms_overrides_default() {
        let spec = TrainSpec::score("/tmp/out", "1").with_delay_ms(25);
        assert_eq!(spec.delay_ms, 25);
    }

    #[test]
    fn serde_roundtrip() {
        let spec = TrainSpec::stamp("/srv/out", "2024.10").with_delay_ms(500);

        let json = serde_json::to_string(&spec).unwrap();
        let back: TrainSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(back.model_dir, spec.model_dir);
        assert_eq!(back.build, spec.build);
        assert_eq!(back.kind, spec.kind);
        assert_eq!(back.delay_ms, spec.delay_ms);
        assert_eq!(back.ensure_dir, spec.ensure_dir);
    }

    #[test]
    fn serde_fills_defaults_for_missing_fields() {
        let json = r#"{"modelDir": "/tmp/out", "build": "42"}"#;
        let spec: TrainSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.kind, MarkerKind::Score);
        assert_eq!(spec.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(spec.ensure_dir, Flag::enabled());
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let json = serde_json::to_string(&TrainSpec::score("/tmp/out", "42")).unwrap();

        assert!(json.contains("\"modelDir\""));
        assert!(json.contains("\"delayMs\""));
        assert!(json.contains("\"ensureDir\""));
    }
}
