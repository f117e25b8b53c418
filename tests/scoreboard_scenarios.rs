use match_scoreboard::file_creation::file_creator::{create_json_file, generate_json};
use match_scoreboard::{
    build_scoreboard, AdrMode, EngineConfig, EventLog, GameEvent, MatchError, PlayerRef,
    PlayerTotals, RecordedMatch, Team,
};

use std::fs;
use std::io::Write;

fn a() -> PlayerRef {
    PlayerRef::new(1, "A", Team::Terrorists)
}

fn b() -> PlayerRef {
    PlayerRef::new(2, "B", Team::CounterTerrorists)
}

fn c() -> PlayerRef {
    PlayerRef::new(3, "C", Team::Terrorists)
}

fn connect(player: PlayerRef) -> GameEvent {
    GameEvent::PlayerConnect {
        player,
        totals: PlayerTotals::default(),
    }
}

fn kill(killer: Option<PlayerRef>, victim: Option<PlayerRef>, is_headshot: bool) -> GameEvent {
    GameEvent::Kill {
        killer,
        victim,
        assister: None,
        is_headshot,
    }
}

fn hurt(attacker: PlayerRef, player: PlayerRef, health_damage: u32) -> GameEvent {
    GameEvent::PlayerHurt {
        attacker: Some(attacker),
        player: Some(player),
        health_damage,
        is_utility: false,
    }
}

#[test]
fn headshot_kill_then_two_rounds() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        kill(Some(a()), Some(b()), true),
        GameEvent::RoundEndOfficial,
        GameEvent::RoundEndOfficial,
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    let killer = scoreboard.get("A").unwrap();
    assert_eq!(killer.kills, 1.0);
    assert_eq!(killer.headshots, Some(1.0));
    assert_eq!(killer.headshot_percentage, Some(1.0));
    assert_eq!(killer.deaths, 0.0);
    assert_eq!(killer.kdr, 1.0);

    let victim = scoreboard.get("B").unwrap();
    assert_eq!(victim.deaths, 1.0);
    assert_eq!(victim.kdr, 0.0);
    assert_eq!(scoreboard.rounds(), 3);
}

#[test]
fn kill_without_victim_changes_nothing() {
    let clean = RecordedMatch::new(vec![connect(a()), connect(b())]);
    let with_broken_kill =
        RecordedMatch::new(vec![connect(a()), connect(b()), kill(Some(a()), None, true)]);

    let expected = build_scoreboard(&clean, &EngineConfig::default()).unwrap();
    let actual = build_scoreboard(&with_broken_kill, &EngineConfig::default()).unwrap();

    assert_eq!(generate_json(&expected).unwrap(), generate_json(&actual).unwrap());
    assert_eq!(actual.incomplete_events(), 1);
}

#[test]
fn kill_without_killer_changes_nothing() {
    let recording = RecordedMatch::new(vec![connect(a()), connect(b()), kill(None, Some(b()), false)]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    assert_eq!(scoreboard.get("B").unwrap().deaths, 0.0);
    assert_eq!(scoreboard.incomplete_events(), 1);
}

#[test]
fn kdr_follows_deaths() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        kill(Some(a()), Some(b()), false),
        kill(Some(a()), Some(b()), false),
        kill(Some(a()), Some(b()), false),
        kill(Some(b()), Some(a()), false),
        kill(Some(b()), Some(a()), false),
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    assert!((scoreboard.get("A").unwrap().kdr - 1.5).abs() < 1e-9);
    assert!((scoreboard.get("B").unwrap().kdr - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn headshot_percentage_only_with_kills() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        kill(Some(a()), Some(b()), true),
        kill(Some(a()), Some(b()), false),
        kill(Some(a()), Some(b()), false),
        kill(Some(a()), Some(b()), true),
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    assert_eq!(scoreboard.get("A").unwrap().headshot_percentage, Some(0.5));
    assert_eq!(scoreboard.get("B").unwrap().headshot_percentage, None);
}

#[test]
fn adr_uses_cumulative_damage_over_rounds() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        hurt(a(), b(), 100),
        GameEvent::RoundEndOfficial,
        hurt(a(), b(), 50),
        GameEvent::RoundEndOfficial,
        GameEvent::RoundEndOfficial,
        hurt(a(), b(), 70),
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    // Damage after the last round end still counts at finalization.
    assert_eq!(scoreboard.get("A").unwrap().adr, Some(220.0 / 4.0));
    assert_eq!(scoreboard.get("A").unwrap().total_damage, 220.0);
    assert_eq!(scoreboard.get("B").unwrap().adr, Some(0.0));
}

#[test]
fn truncated_adr_mode() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        hurt(a(), b(), 100),
        GameEvent::RoundEndOfficial,
        GameEvent::RoundEndOfficial,
    ]);
    let config = EngineConfig {
        adr_mode: AdrMode::Truncated,
        ..EngineConfig::default()
    };

    let scoreboard = build_scoreboard(&recording, &config).unwrap();

    assert_eq!(scoreboard.get("A").unwrap().adr, Some(33.0));
}

#[test]
fn flashes_count_only_against_enemies() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        connect(c()),
        GameEvent::PlayerFlashed {
            attacker: Some(a()),
            player: Some(c()),
        },
        GameEvent::PlayerFlashed {
            attacker: Some(a()),
            player: Some(b()),
        },
        GameEvent::PlayerFlashed {
            attacker: Some(b()),
            player: None,
        },
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();

    assert_eq!(scoreboard.get("A").unwrap().flash_assists, Some(1.0));
    assert_eq!(scoreboard.get("B").unwrap().flash_assists, None);
    assert_eq!(scoreboard.get("C").unwrap().flash_assists, None);
}

#[test]
fn reconnect_counts_each_event_once() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        hurt(a(), b(), 100),
        kill(Some(a()), Some(b()), true),
        GameEvent::PlayerConnect {
            player: a(),
            totals: PlayerTotals {
                total_damage: 100,
                kills: 1,
                ..PlayerTotals::default()
            },
        },
        hurt(a(), b(), 40),
        kill(Some(a()), Some(b()), false),
        GameEvent::RoundEndOfficial,
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();
    let entry = scoreboard.get("A").unwrap();

    assert_eq!(entry.kills, 2.0);
    assert_eq!(entry.total_damage, 140.0);
    assert_eq!(entry.headshots, Some(1.0));
    assert_eq!(entry.headshot_percentage, Some(0.5));
    assert_eq!(entry.adr, Some(70.0));
    assert_eq!(scoreboard.get("B").unwrap().deaths, 2.0);
}

#[test]
fn late_joiner_is_seeded_from_first_connect_totals() {
    let recording = RecordedMatch::new(vec![
        connect(b()),
        GameEvent::PlayerConnect {
            player: a(),
            totals: PlayerTotals {
                total_damage: 300,
                kills: 2,
                deaths: 1,
                assists: 1,
                ..PlayerTotals::default()
            },
        },
        kill(Some(a()), Some(b()), true),
    ]);

    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();
    let entry = scoreboard.get("A").unwrap();

    assert_eq!(entry.kills, 3.0);
    assert_eq!(entry.assists, 1.0);
    assert_eq!(entry.kdr, 3.0);
    assert!((entry.headshot_percentage.unwrap() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn damaged_recording_produces_no_scoreboard() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        kill(Some(a()), Some(b()), true),
    ])
    .truncated_after(2);

    assert!(matches!(
        build_scoreboard(&recording, &EngineConfig::default()),
        Err(MatchError::IdentityPass(_))
    ));
}

#[test]
fn event_log_runs_are_byte_identical() {
    let events = vec![
        connect(a()),
        connect(b()),
        connect(c()),
        hurt(a(), b(), 64),
        kill(Some(a()), Some(b()), true),
        GameEvent::RoundEndOfficial,
        hurt(b(), c(), 27),
        kill(Some(c()), Some(b()), false),
        GameEvent::RoundEndOfficial,
    ];
    let mut log_file = tempfile::NamedTempFile::new().unwrap();
    for event in &events {
        writeln!(log_file, "{}", serde_json::to_string(event).unwrap()).unwrap();
    }
    writeln!(log_file, r#"{{"type":"BombPlanted","site":"B"}}"#).unwrap();
    let log = EventLog::new(log_file.path());

    let first = generate_json(&build_scoreboard(&log, &EngineConfig::default()).unwrap()).unwrap();
    let second = generate_json(&build_scoreboard(&log, &EngineConfig::default()).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn exported_document_uses_metric_names() {
    let recording = RecordedMatch::new(vec![
        connect(a()),
        connect(b()),
        kill(Some(a()), Some(b()), true),
        GameEvent::PlayerFlashed {
            attacker: Some(a()),
            player: Some(b()),
        },
    ]);
    let scoreboard = build_scoreboard(&recording, &EngineConfig::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.json");

    create_json_file(&path, &scoreboard).unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let metrics = document["A"].as_object().unwrap();
    for key in [
        "Total Damage",
        "Utility Damage",
        "Kills",
        "Deaths",
        "Assists",
        "KDR",
        "ADR",
        "Headshots",
        "Headshot %",
        "Flash Assists",
    ] {
        assert!(metrics.contains_key(key), "missing {}", key);
    }
    assert_eq!(document["A"]["Kills"], 1.0);
    assert!(document["B"].get("Headshot %").is_none());
}
