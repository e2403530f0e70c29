mod flag;
pub use flag::Flag;

mod constants;
pub use constants::{DEFAULT_DELAY_MS, MARKER_FILE_NAME};

/// Opaque label of the build that triggered the run.
///
/// Supplied externally and embedded verbatim into the stamp marker;
/// no structure is assumed or validated.
pub type BuildTag = String;

/// Simulated compute time in milliseconds.
pub type DelayMs = u64;
