pub mod award_record;
pub mod prize_interval;
