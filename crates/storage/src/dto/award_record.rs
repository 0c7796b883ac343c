use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AwardRecord, ProducerList};

/// Award record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AwardRecordResponse {
    pub id: Uuid,
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

impl From<AwardRecord> for AwardRecordResponse {
    fn from(record: AwardRecord) -> Self {
        Self {
            id: record.id,
            year: record.year,
            title: record.title,
            studios: record.studios,
            producers: record.producers,
            winner: record.winner,
        }
    }
}

/// Request payload for creating a new award record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAwardRecordRequest {
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Title must be between 3 and 150 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Studios must be between 3 and 150 characters"
    ))]
    pub studios: String,

    #[validate(
        length(
            min = 3,
            max = 150,
            message = "Producers must be between 3 and 150 characters"
        ),
        custom(
            function = "validate_producers",
            message = "Producers must name at least one producer"
        )
    )]
    pub producers: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Winner must be between 3 and 150 characters"
    ))]
    pub winner: String,
}

impl CreateAwardRecordRequest {
    pub fn to_record(&self, id: Uuid) -> AwardRecord {
        AwardRecord {
            id,
            year: self.year.clone(),
            title: self.title.clone(),
            studios: self.studios.clone(),
            producers: self.producers.clone(),
            winner: self.winner.clone(),
        }
    }
}

/// Request payload for replacing every field of an existing award record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAwardRecordRequest {
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Title must be between 3 and 150 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Studios must be between 3 and 150 characters"
    ))]
    pub studios: String,

    #[validate(
        length(
            min = 3,
            max = 150,
            message = "Producers must be between 3 and 150 characters"
        ),
        custom(
            function = "validate_producers",
            message = "Producers must name at least one producer"
        )
    )]
    pub producers: String,

    #[validate(length(
        min = 3,
        max = 150,
        message = "Winner must be between 3 and 150 characters"
    ))]
    pub winner: String,
}

impl UpdateAwardRecordRequest {
    pub fn to_record(&self, id: Uuid) -> AwardRecord {
        AwardRecord {
            id,
            year: self.year.clone(),
            title: self.title.clone(),
            studios: self.studios.clone(),
            producers: self.producers.clone(),
            winner: self.winner.clone(),
        }
    }
}

// Validation helper
fn validate_producers(producers: &str) -> Result<(), validator::ValidationError> {
    if ProducerList::parse(producers).is_empty() {
        Err(validator::ValidationError::new("no_producers"))
    } else {
        Ok(())
    }
}
