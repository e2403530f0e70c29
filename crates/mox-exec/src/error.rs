use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid specification: {0}")]
    InvalidSpec(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to format marker timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}
