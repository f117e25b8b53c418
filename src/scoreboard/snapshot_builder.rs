use crate::scoreboard::scoreboard_entry::ScoreboardEntry;
use crate::stat_accumulation::stat_accumulator::AccumulatorState;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// The final statistics of one match, keyed by player display name.
///
/// Built once by `finalize` and never modified afterwards. Serializes as a
/// plain mapping from name to metrics; the match-level fields are only
/// available through the accessors.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Scoreboard {
    players: BTreeMap<String, ScoreboardEntry>,
    #[serde(skip)]
    rounds: u32,
    #[serde(skip)]
    incomplete_events: usize,
}

impl Scoreboard {
    pub fn get(&self, name: &str) -> Option<&ScoreboardEntry> {
        self.players.get(name)
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreboardEntry)> {
        self.players.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The round counter when the recording ended.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn incomplete_events(&self) -> usize {
        self.incomplete_events
    }
}

/// Turns the accumulator's rows into the match scoreboard.
///
/// Every derived metric is recomputed from the final cumulative counters, so
/// values cached before the last damage or kill event are never exported.
/// Players sharing a display name collapse into the one with the highest
/// session identifier.
///
/// # Arguments
///
/// * `state` - The state left by a completed accumulation pass.
///
/// # Returns
///
/// The finalized `Scoreboard`.
pub fn finalize(mut state: AccumulatorState) -> Scoreboard {
    let rounds = state.rounds.get();
    let adr_mode = state.config.adr_mode;
    let mut players = BTreeMap::new();

    for row in state.rows.values_mut() {
        row.recompute_kdr();
        row.recompute_adr(rounds, adr_mode);
        row.recompute_headshot_percentage();

        if players.insert(row.name.clone(), ScoreboardEntry::from(&*row)).is_some() {
            warn!(
                name = %row.name,
                user_id = row.user_id,
                "duplicate display name, keeping the later player"
            );
        }
    }

    info!(players = players.len(), rounds, "scoreboard finalized");
    Scoreboard {
        players,
        rounds,
        incomplete_events: state.incomplete_events,
    }
}
