use tracing::info;

use mox_exec::trainer::TrainRunner;
use mox_model::{MarkerKind, TrainSpec};
use mox_observe::{
    LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger,
};

use crate::config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, RunConfig};

mod config;

fn main() -> anyhow::Result<()> {
    // Local offset must be probed before the runtime owns any threads.
    init_local_offset();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run())
}

async fn run() -> anyhow::Result<()> {
    // 1) logger
    let log_cfg = LoggerConfig {
        level: match std::env::var(ENV_LOG_LEVEL) {
            Ok(raw) => LoggerLevel::new(raw)?,
            Err(_) => LoggerLevel::default(),
        },
        format: match std::env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse::<LoggerFormat>()?,
            Err(_) => LoggerFormat::default(),
        },
        tz: LoggerTimeZone::Local,
        ..Default::default()
    };
    init_logger(&log_cfg)?;

    // 2) run parameters, before any filesystem side effect
    let cfg = RunConfig::from_env()?;
    info!(
        model_dir = %cfg.model_dir.display(),
        build = %cfg.build,
        marker = %cfg.marker,
        "starting simulated training run"
    );

    // 3) spec + runner
    let spec = match cfg.marker {
        MarkerKind::Score => TrainSpec::score(cfg.model_dir, cfg.build),
        MarkerKind::Stamp => TrainSpec::stamp(cfg.model_dir, cfg.build),
    };
    let outcome = TrainRunner::from_spec(&spec)?.run().await?;

    info!(path = %outcome.marker_path.display(), "simulated training run finished");
    Ok(())
}
