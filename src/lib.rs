//! Per-player match statistics computed from a recorded stream of gameplay events.
//!
//! A match is read in two passes: the first collects the participants, the
//! second accumulates damage, kills, deaths, assists, headshots and enemy
//! flashes for each of them. The result is a `Scoreboard` that serializes to
//! a mapping from player name to metrics.

pub mod config;
pub mod event_source;
pub mod file_creation;
pub mod match_processing;
pub mod player_registry;
pub mod scoreboard;
pub mod stat_accumulation;

pub use config::engine_config::{AdrMode, EngineConfig};
pub use event_source::event_log::EventLog;
pub use event_source::game_event::{GameEvent, PlayerRef, PlayerTotals, Team};
pub use event_source::recorded_match::RecordedMatch;
pub use event_source::source_error::SourceError;
pub use event_source::EventSource;
pub use match_processing::match_processor::{build_scoreboard, process_matches_in_parallel, MatchError};
pub use scoreboard::snapshot_builder::Scoreboard;
