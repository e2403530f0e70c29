//! Common model-level constants.
//!
//! Well-known names shared between the runner and the binary live here so
//! they are spelled exactly once.

/// Name of the marker file written into the output directory.
///
/// The surrounding pipeline polls for this exact name to decide that the
/// "training" step finished; do not rename it without coordinating with the
/// consumers of the output directory.
pub const MARKER_FILE_NAME: &str = "complete.txt";

/// Default simulated compute time, in milliseconds.
///
/// Real runs block for this long before the marker is written. Tests build
/// their specs with [`crate::TrainSpec::with_delay_ms`] instead.
pub const DEFAULT_DELAY_MS: u64 = 15_000;
