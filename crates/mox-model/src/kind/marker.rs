use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Kind of result value written into the marker file.
///
/// The two kinds correspond to the two generations of the job:
/// - `Stamp` is the legacy payload (wall-clock timestamp plus build tag),
/// - `Score` is the current payload (one uniform random draw) and the
///   default everywhere a kind is not given explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    /// Local timestamp (`YYYY-MM-DD HH-MM`) concatenated with the build tag.
    Stamp,
    /// Uniform random score in `[0, 1)`.
    Score,
}

impl MarkerKind {
    /// Returns the kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            MarkerKind::Stamp => "stamp",
            MarkerKind::Score => "score",
        }
    }
}

impl Default for MarkerKind {
    fn default() -> Self {
        MarkerKind::Score
    }
}

impl FromStr for MarkerKind {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "stamp" => Ok(Self::Stamp),
            "score" => Ok(Self::Score),
            _ => Err(ModelError::UnknownMarkerKind(s.to_string())),
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}
