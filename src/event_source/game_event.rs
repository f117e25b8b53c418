use serde::{Deserialize, Serialize};

/// Side a player is playing on when an event is emitted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Team {
    #[default]
    Unassigned,
    Spectators,
    Terrorists,
    CounterTerrorists,
}

/// A participant as referenced from inside an event.
///
/// # Fields
///
/// * `user_id` - The player's session identifier, stable for the whole match.
/// * `name` - The display name at the time of the event.
/// * `team` - The side the player was on at the time of the event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub user_id: u64,
    pub name: String,
    #[serde(default)]
    pub team: Team,
}

impl PlayerRef {
    pub fn new(user_id: u64, name: &str, team: Team) -> Self {
        PlayerRef {
            user_id,
            name: name.to_owned(),
            team,
        }
    }
}

/// Cumulative counters the event source knows about a player when it connects.
///
/// A player joining at the start of a match has all counters at zero. Only the
/// totals of a player's first connect are used; later connects carry counts
/// the recording's own events already account for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerTotals {
    #[serde(default)]
    pub total_damage: u32,
    #[serde(default)]
    pub utility_damage: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
}

/// One decoded gameplay event, in the order the recording emits them.
///
/// Participants are optional because the recording does not always resolve
/// them (world damage, disconnected players, bots without an entity).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GameEvent {
    PlayerConnect {
        player: PlayerRef,
        #[serde(default)]
        totals: PlayerTotals,
    },
    PlayerHurt {
        attacker: Option<PlayerRef>,
        player: Option<PlayerRef>,
        health_damage: u32,
        #[serde(default)]
        is_utility: bool,
    },
    Kill {
        killer: Option<PlayerRef>,
        victim: Option<PlayerRef>,
        #[serde(default)]
        assister: Option<PlayerRef>,
        #[serde(default)]
        is_headshot: bool,
    },
    PlayerFlashed {
        attacker: Option<PlayerRef>,
        player: Option<PlayerRef>,
    },
    RoundEndOfficial,
    /// Any event kind this crate does not aggregate.
    #[serde(other)]
    Unknown,
}

impl GameEvent {
    /// Short name used when logging skipped events.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::PlayerConnect { .. } => "PlayerConnect",
            GameEvent::PlayerHurt { .. } => "PlayerHurt",
            GameEvent::Kill { .. } => "Kill",
            GameEvent::PlayerFlashed { .. } => "PlayerFlashed",
            GameEvent::RoundEndOfficial => "RoundEndOfficial",
            GameEvent::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_kill_with_missing_optional_fields() {
        let line = r#"{"type":"Kill","killer":{"user_id":3,"name":"A","team":"Terrorists"},"victim":null}"#;
        let event: GameEvent = serde_json::from_str(line).unwrap();

        assert_eq!(
            event,
            GameEvent::Kill {
                killer: Some(PlayerRef::new(3, "A", Team::Terrorists)),
                victim: None,
                assister: None,
                is_headshot: false,
            }
        );
    }

    #[test]
    fn unrecognized_kinds_decode_as_unknown() {
        let event: GameEvent =
            serde_json::from_str(r#"{"type":"BombPlanted","site":"A"}"#).unwrap();
        assert_eq!(event, GameEvent::Unknown);
        assert_eq!(event.kind(), "Unknown");
    }

    #[test]
    fn connect_without_totals_starts_from_zero() {
        let event: GameEvent = serde_json::from_str(
            r#"{"type":"PlayerConnect","player":{"user_id":1,"name":"A"}}"#,
        )
        .unwrap();

        match event {
            GameEvent::PlayerConnect { player, totals } => {
                assert_eq!(player.team, Team::Unassigned);
                assert_eq!(totals, PlayerTotals::default());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
