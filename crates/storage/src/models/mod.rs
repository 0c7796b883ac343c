mod award_record;
mod producer_list;

pub use award_record::{AwardRecord, WINNER_FLAG};
pub use producer_list::ProducerList;
