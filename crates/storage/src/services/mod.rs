pub mod prize_intervals;
