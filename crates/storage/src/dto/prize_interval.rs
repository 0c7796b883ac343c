use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gap between two consecutive wins of the same producer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

impl ProducerInterval {
    pub fn new(producer: impl Into<String>, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer: producer.into(),
            interval: i64::from(following_win) - i64::from(previous_win),
            previous_win,
            following_win,
        }
    }
}

/// Producers with the smallest and largest gaps between wins.
///
/// Both lists hold every interval reaching the extreme value, ordered by
/// producer and then by the earlier win. Both are empty when no producer
/// has won twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrizeIntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl PrizeIntervalReport {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}
