mod clock;
pub use clock::{LoggerTimeZone, init_local_offset, local_offset};

mod config;
pub use config::LoggerConfig;

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod init;

/// Initializes the global tracing subscriber with the given configuration.
///
/// Once installed, all `tracing` macros (`info!`, `debug!`, ...) go through
/// this configuration. Calling it a second time fails with
/// [`LoggerError::AlreadyInitialized`].
///
/// # Important: Local Timezone
/// For `LoggerTimeZone::Local` timestamps, call [`init_local_offset`] in
/// `main()` before the async runtime starts; offset detection fails once
/// threads exist on most Unix platforms.
///
/// # Examples
/// ```rust
/// use mox_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("failed to initialize logger");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::logger_text(cfg),
        LoggerFormat::Json => init::logger_json(cfg),
    }
}
