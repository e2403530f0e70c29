use rand::{Rng, distributions::Standard};
use time::OffsetDateTime;

/// Render the legacy stamp payload for the given instant and build tag.
///
/// The text is matched verbatim by downstream pipeline checks, prefix and
/// missing separator included; treat every byte as part of the format.
pub(crate) fn stamp_line(now: OffsetDateTime, build: &str) -> Result<String, time::error::Format> {
    let format = time::macros::format_description!("[year]-[month]-[day] [hour]-[minute]");
    let ts = now.format(&format)?;
    Ok(format!("Python writing: {ts}Build Number: {build}"))
}

/// Draw one uniform score in `[0, 1)`.
pub(crate) fn draw_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Standard)
}

/// Render the score payload: the decimal form of the float, nothing else.
pub(crate) fn score_line(score: f64) -> String {
    score.to_string()
}
