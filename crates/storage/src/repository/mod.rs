pub mod award_record;
