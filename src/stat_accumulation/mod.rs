pub mod round_counter;
pub mod stat_accumulator;
pub mod stat_row;
