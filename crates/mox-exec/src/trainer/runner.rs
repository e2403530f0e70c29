use std::{path::PathBuf, time::Duration};

use time::OffsetDateTime;
use tokio::fs;
use tracing::{debug, info};

use mox_model::{MARKER_FILE_NAME, MarkerKind, TrainSpec};
use mox_observe::local_offset;

use crate::{
    ExecError,
    trainer::{marker, task::TrainTaskConfig},
};

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// Path of the written marker file.
    pub marker_path: PathBuf,
    /// Exact payload that was written.
    pub payload: String,
}

/// Runner that executes a [`TrainSpec`] as one linear simulated job.
#[derive(Debug)]
pub struct TrainRunner {
    config: TrainTaskConfig,
}

impl TrainRunner {
    /// Build a runner from a spec, validating it first.
    pub fn from_spec(spec: &TrainSpec) -> Result<Self, ExecError> {
        let config = TrainTaskConfig {
            run_id: build_run_id(&spec.build),
            model_dir: spec.model_dir.clone(),
            build: spec.build.clone(),
            kind: spec.kind,
            delay_ms: spec.delay_ms,
            ensure_dir: spec.ensure_dir,
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Execute the run: provision the output directory, wait out the
    /// simulated compute time, render the payload and write the marker.
    ///
    /// The wait has no cancellation hook; once started, the run only stops
    /// with the process. Errors are not retried and a failed write leaves
    /// nothing to clean up beyond the truncated marker itself.
    pub async fn run(&self) -> Result<TrainOutcome, ExecError> {
        let cfg = &self.config;
        cfg.trace_state();

        if cfg.ensure_dir.is_enabled() {
            debug!(task = %cfg.run_id, dir = %cfg.model_dir.display(), "ensuring model directory");
            fs::create_dir_all(&cfg.model_dir).await?;
        }

        info!(
            task = %cfg.run_id,
            model_dir = %cfg.model_dir.display(),
            build = %cfg.build,
            delay_ms = cfg.delay_ms,
            "simulating model training"
        );
        tokio::time::sleep(Duration::from_millis(cfg.delay_ms)).await;

        let payload = match cfg.kind {
            MarkerKind::Stamp => {
                let now = OffsetDateTime::now_utc().to_offset(local_offset());
                marker::stamp_line(now, &cfg.build)?
            }
            MarkerKind::Score => {
                let score = marker::draw_score(&mut rand::thread_rng());
                info!(task = %cfg.run_id, score, "simulated training produced a score");
                marker::score_line(score)
            }
        };

        let path = cfg.model_dir.join(MARKER_FILE_NAME);
        fs::write(&path, payload.as_bytes()).await?;
        info!(task = %cfg.run_id, path = %path.display(), "marker file written");

        Ok(TrainOutcome {
            marker_path: path,
            payload,
        })
    }
}

/// Log identifier derived from the build tag.
fn build_run_id(build: &str) -> String {
    format!("train-{build}")
}
