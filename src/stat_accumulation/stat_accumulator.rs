use crate::config::engine_config::EngineConfig;
use crate::event_source::game_event::{GameEvent, PlayerRef};
use crate::event_source::source_error::SourceError;
use crate::player_registry::player_identity::PlayerRegistry;
use crate::stat_accumulation::round_counter::RoundCounter;
use crate::stat_accumulation::stat_row::StatRow;

use std::collections::BTreeMap;
use tracing::{debug, info};

/// Everything the accumulation pass produced, ready to be finalized.
///
/// # Fields
///
/// * `rows` - One `StatRow` per registered player, keyed by session identifier.
/// * `rounds` - The round counter after the last event.
/// * `incomplete_events` - Events skipped because a participant was missing or unknown.
/// * `events_processed` - Events read during the pass, skipped ones included.
#[derive(Debug, Clone)]
pub struct AccumulatorState {
    pub(crate) rows: BTreeMap<u64, StatRow>,
    pub(crate) rounds: RoundCounter,
    pub(crate) incomplete_events: usize,
    pub(crate) events_processed: usize,
    pub(crate) config: EngineConfig,
}

impl AccumulatorState {
    /// Seeds one row per registered player from the player's totals at pass start.
    pub fn seeded(registry: &PlayerRegistry, config: &EngineConfig) -> Self {
        let rows = registry
            .iter()
            .map(|identity| {
                let row = StatRow::seeded(identity.user_id, &identity.name, identity.totals);
                (identity.user_id, row)
            })
            .collect();

        AccumulatorState {
            rows,
            rounds: RoundCounter::new(config.initial_round),
            incomplete_events: 0,
            events_processed: 0,
            config: *config,
        }
    }

    pub fn row(&self, user_id: u64) -> Option<&StatRow> {
        self.rows.get(&user_id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &StatRow> {
        self.rows.values()
    }

    pub fn rounds(&self) -> u32 {
        self.rounds.get()
    }

    pub fn incomplete_events(&self) -> usize {
        self.incomplete_events
    }

    pub fn events_processed(&self) -> usize {
        self.events_processed
    }

    /// Applies one event to the rows. This is the whole transition table.
    pub fn apply(&mut self, event: &GameEvent) {
        self.events_processed += 1;

        let complete = match event {
            GameEvent::RoundEndOfficial => {
                self.end_round();
                true
            }
            GameEvent::Kill {
                killer,
                victim,
                assister,
                is_headshot,
            } => self.record_kill(killer, victim, assister, *is_headshot),
            GameEvent::PlayerFlashed { attacker, player } => self.record_flash(attacker, player),
            GameEvent::PlayerHurt {
                attacker,
                player,
                health_damage,
                is_utility,
            } => self.record_damage(attacker, player, *health_damage, *is_utility),
            GameEvent::PlayerConnect { .. } | GameEvent::Unknown => true,
        };

        if !complete {
            self.skip_incomplete(event.kind());
        }
    }

    fn end_round(&mut self) {
        self.rounds.advance();
        let rounds = self.rounds.get();
        let mode = self.config.adr_mode;
        for row in self.rows.values_mut() {
            row.recompute_adr(rounds, mode);
        }
        debug!(round = rounds, "round ended");
    }

    /// Returns `false` when the killer or victim is missing or unknown.
    fn record_kill(
        &mut self,
        killer: &Option<PlayerRef>,
        victim: &Option<PlayerRef>,
        assister: &Option<PlayerRef>,
        is_headshot: bool,
    ) -> bool {
        let (Some(killer_id), Some(victim_id)) = (self.resolve(killer), self.resolve(victim)) else {
            return false;
        };

        if let Some(row) = self.rows.get_mut(&victim_id) {
            row.deaths += 1;
            row.recompute_kdr();
        }

        if killer_id != victim_id {
            if let Some(row) = self.rows.get_mut(&killer_id) {
                row.kills += 1;
                if is_headshot {
                    row.headshots += 1;
                    row.recompute_headshot_percentage();
                }
                row.recompute_kdr();
            }
        }

        if let Some(assister_id) = self.resolve(assister) {
            if assister_id != killer_id && assister_id != victim_id {
                if let Some(row) = self.rows.get_mut(&assister_id) {
                    row.assists += 1;
                }
            }
        }
        true
    }

    fn record_flash(&mut self, attacker: &Option<PlayerRef>, player: &Option<PlayerRef>) -> bool {
        let (Some(attacker_ref), Some(player_ref)) = (attacker, player) else {
            return false;
        };
        if !self.rows.contains_key(&attacker_ref.user_id)
            || !self.rows.contains_key(&player_ref.user_id)
        {
            return false;
        }

        if attacker_ref.team != player_ref.team {
            if let Some(row) = self.rows.get_mut(&attacker_ref.user_id) {
                row.flash_assists += 1;
            }
        }
        true
    }

    fn record_damage(
        &mut self,
        attacker: &Option<PlayerRef>,
        player: &Option<PlayerRef>,
        health_damage: u32,
        is_utility: bool,
    ) -> bool {
        let (Some(attacker_ref), Some(player_ref)) = (attacker, player) else {
            return false;
        };
        if !self.rows.contains_key(&attacker_ref.user_id)
            || !self.rows.contains_key(&player_ref.user_id)
        {
            return false;
        }

        // Self and team damage do not count towards ADR.
        if attacker_ref.user_id == player_ref.user_id || attacker_ref.team == player_ref.team {
            return true;
        }

        if let Some(row) = self.rows.get_mut(&attacker_ref.user_id) {
            row.total_damage = row.total_damage.saturating_add(health_damage);
            if is_utility {
                row.utility_damage = row.utility_damage.saturating_add(health_damage);
            }
        }
        true
    }

    /// Returns the session key of a participant that is present and registered.
    fn resolve(&self, player: &Option<PlayerRef>) -> Option<u64> {
        player
            .as_ref()
            .map(|player| player.user_id)
            .filter(|user_id| self.rows.contains_key(user_id))
    }

    fn skip_incomplete(&mut self, kind: &'static str) {
        self.incomplete_events += 1;
        debug!(
            kind,
            event_index = self.events_processed,
            "skipping incomplete event"
        );
    }
}

/// Runs the accumulation pass over `events`, seeded with `registry`.
///
/// Events are applied one at a time, in order. Incomplete events are skipped
/// and counted; a failing recording aborts the pass and no state is returned.
///
/// # Arguments
///
/// * `events` - A complete pass over the same recording the registry was built from.
/// * `registry` - The participants found by the identity pass.
/// * `config` - Engine settings for the round counter and ADR.
///
/// # Returns
///
/// * `Ok(AccumulatorState)` - The rows after the last event.
/// * `Err(SourceError)` - If the recording fails mid-pass.
pub fn accumulate<I>(
    events: I,
    registry: &PlayerRegistry,
    config: &EngineConfig,
) -> Result<AccumulatorState, SourceError>
where
    I: IntoIterator<Item = Result<GameEvent, SourceError>>,
{
    let mut state = AccumulatorState::seeded(registry, config);

    for event in events {
        state.apply(&event?);
    }

    info!(
        players = state.rows.len(),
        rounds = state.rounds.get(),
        events = state.events_processed,
        incomplete = state.incomplete_events,
        "accumulation pass complete"
    );
    Ok(state)
}
