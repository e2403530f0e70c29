use std::{
    fmt,
    str::FromStr,
    sync::{OnceLock, RwLock},
};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing::warn;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::error::LoggerError;

/// Cached local UTC offset, written once by [`init_local_offset`].
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Tracks whether offset detection has been attempted.
static INIT_DONE: OnceLock<()> = OnceLock::new();

/// Timezone used for timestamps.
///
/// - `Utc`: always works, default.
/// - `Local`: system timezone, resolved through the cached offset.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum LoggerTimeZone {
    /// UTC timezone.
    Utc,
    /// Local system timezone.
    Local,
}

impl Default for LoggerTimeZone {
    fn default() -> Self {
        Self::Utc
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        };
        f.write_str(s)
    }
}

/// Detects and caches the local UTC offset.
///
/// **Call in `main()` before the async runtime starts.** Offset detection
/// fails once the process has more than one thread on most Unix platforms;
/// after that, [`local_offset`] keeps returning whatever was cached here.
///
/// Falls back to UTC silently if detection fails.
pub fn init_local_offset() {
    INIT_DONE.get_or_init(|| {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        if let Ok(mut guard) = LOCAL_OFFSET.write() {
            *guard = offset;
        }
    });
}

/// Returns the cached local offset, detecting it on first use.
///
/// Used for `LoggerTimeZone::Local` log timestamps and for any other
/// wall-clock rendering that has to work inside a runtime.
pub fn local_offset() -> UtcOffset {
    INIT_DONE.get_or_init(|| match UtcOffset::current_local_offset() {
        Ok(detected) => {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = detected;
            }
        }
        Err(_) => {
            warn!(
                "local timezone detection failed; call init_local_offset() before the \
                 runtime starts, falling back to UTC"
            );
        }
    });

    LOCAL_OFFSET.read().map(|guard| *guard).unwrap_or(UtcOffset::UTC)
}

/// RFC 3339 timestamp formatter for log lines.
///
/// Renders in the configured timezone; `Local` goes through the cached
/// offset so it keeps working after threads exist.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rfc3339Timer {
    tz: LoggerTimeZone,
}

impl Rfc3339Timer {
    pub(crate) fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }
}

impl FormatTime for Rfc3339Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = match self.tz {
            LoggerTimeZone::Utc => OffsetDateTime::now_utc(),
            LoggerTimeZone::Local => OffsetDateTime::now_utc().to_offset(local_offset()),
        };

        match now.format(&Rfc3339) {
            Ok(ts) => write!(w, "{} ", ts),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}
