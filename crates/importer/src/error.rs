use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Dataset has no header row")]
    EmptyDataset,

    #[error("Dataset header is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),
}
