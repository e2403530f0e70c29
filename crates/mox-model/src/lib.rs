mod domain;
pub use domain::{DEFAULT_DELAY_MS, MARKER_FILE_NAME};
pub use domain::{BuildTag, DelayMs, Flag};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::MarkerKind;

mod spec;
pub use spec::TrainSpec;
