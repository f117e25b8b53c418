pub mod scoreboard_entry;
pub mod snapshot_builder;
