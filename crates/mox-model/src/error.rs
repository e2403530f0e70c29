use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown marker kind: {0} (expected: stamp|score)")]
    UnknownMarkerKind(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
