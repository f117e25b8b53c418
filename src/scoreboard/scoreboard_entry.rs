use crate::stat_accumulation::stat_row::StatRow;

use serde::Serialize;

/// The exported metrics of one player.
///
/// Every metric is a float. Sparse metrics are left out of the document
/// instead of being written as zero.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreboardEntry {
    #[serde(rename = "Total Damage")]
    pub total_damage: f64,
    #[serde(rename = "Utility Damage")]
    pub utility_damage: f64,
    #[serde(rename = "Kills")]
    pub kills: f64,
    #[serde(rename = "Deaths")]
    pub deaths: f64,
    #[serde(rename = "Assists")]
    pub assists: f64,
    #[serde(rename = "KDR")]
    pub kdr: f64,
    #[serde(rename = "ADR", skip_serializing_if = "Option::is_none")]
    pub adr: Option<f64>,
    #[serde(rename = "Headshots", skip_serializing_if = "Option::is_none")]
    pub headshots: Option<f64>,
    #[serde(rename = "Headshot %", skip_serializing_if = "Option::is_none")]
    pub headshot_percentage: Option<f64>,
    #[serde(rename = "Flash Assists", skip_serializing_if = "Option::is_none")]
    pub flash_assists: Option<f64>,
}

impl From<&StatRow> for ScoreboardEntry {
    fn from(row: &StatRow) -> Self {
        let non_zero = |count: u32| (count > 0).then(|| f64::from(count));

        ScoreboardEntry {
            total_damage: f64::from(row.total_damage),
            utility_damage: f64::from(row.utility_damage),
            kills: f64::from(row.kills),
            deaths: f64::from(row.deaths),
            assists: f64::from(row.assists),
            kdr: row.kdr,
            adr: row.adr,
            headshots: non_zero(row.headshots),
            headshot_percentage: row.headshot_percentage,
            flash_assists: non_zero(row.flash_assists),
        }
    }
}
