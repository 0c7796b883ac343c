use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Record {record_id} has a non-numeric year: {year:?}")]
    InvalidYear { record_id: Uuid, year: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound)
    }

    pub fn duplicate_id(id: Uuid) -> Self {
        StorageError::ConstraintViolation(format!("record id {} already exists", id))
    }
}
