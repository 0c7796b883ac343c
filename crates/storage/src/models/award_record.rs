use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};

use super::ProducerList;

/// Value of the `winner` field that marks an award win. Compared case-sensitively.
pub const WINNER_FLAG: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AwardRecord {
    pub id: Uuid,
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

impl AwardRecord {
    pub fn is_winner(&self) -> bool {
        self.winner == WINNER_FLAG
    }

    pub fn producer_list(&self) -> ProducerList {
        ProducerList::parse(&self.producers)
    }

    /// Parses the textual year. Surrounding whitespace is ignored; anything
    /// else that is not a decimal integer is a data error.
    pub fn parse_year(&self) -> Result<i32> {
        self.year
            .trim()
            .parse()
            .map_err(|_| StorageError::InvalidYear {
                record_id: self.id,
                year: self.year.clone(),
            })
    }
}
