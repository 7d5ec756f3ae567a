use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid root path: {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Other(String),
}
