use crate::config::engine_config::AdrMode;
use crate::event_source::game_event::PlayerTotals;

/// Running statistics of one player during the accumulation pass.
///
/// Raw counters are cumulative for the whole match. The derived ratios are
/// cached values, always recomputed from the counters rather than adjusted
/// by deltas.
///
/// # Fields
///
/// * `user_id` - Session identifier of the player this row belongs to.
/// * `name` - Display name the row is exported under.
/// * `total_damage` - Health damage dealt to enemies, utility included.
/// * `utility_damage` - The part of `total_damage` dealt with grenades.
/// * `kills`, `deaths`, `assists` - Cumulative counts.
/// * `headshots` - Kills credited during the pass that were headshots.
/// * `flash_assists` - Enemies blinded during the pass.
/// * `kdr` - Kill/death ratio, falling back to `kills` when `deaths` is zero.
/// * `adr` - Average damage per round, unset until first computed.
/// * `headshot_percentage` - `headshots / kills`, unset while `kills` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub user_id: u64,
    pub name: String,
    pub total_damage: u32,
    pub utility_damage: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub flash_assists: u32,
    pub kdr: f64,
    pub adr: Option<f64>,
    pub headshot_percentage: Option<f64>,
}

impl StatRow {
    /// Creates a row from the totals the player had when the pass started.
    pub fn seeded(user_id: u64, name: &str, totals: PlayerTotals) -> Self {
        let mut row = StatRow {
            user_id,
            name: name.to_owned(),
            total_damage: totals.total_damage,
            utility_damage: totals.utility_damage,
            kills: totals.kills,
            deaths: totals.deaths,
            assists: totals.assists,
            headshots: 0,
            flash_assists: 0,
            kdr: 0.0,
            adr: None,
            headshot_percentage: None,
        };
        row.recompute_kdr();
        row
    }

    pub fn recompute_kdr(&mut self) {
        self.kdr = if self.deaths == 0 {
            f64::from(self.kills)
        } else {
            f64::from(self.kills) / f64::from(self.deaths)
        };
    }

    pub fn recompute_adr(&mut self, rounds: u32, mode: AdrMode) {
        self.adr = Some(mode.average(self.total_damage, rounds.max(1)));
    }

    /// Leaves the percentage untouched when there are no kills to divide by.
    pub fn recompute_headshot_percentage(&mut self) {
        if self.kills > 0 {
            self.headshot_percentage = Some(f64::from(self.headshots) / f64::from(self.kills));
        }
    }
}
