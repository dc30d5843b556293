use chess_core::Color;
use selfplay::{load_records, run, tally, SelfPlayConfig};

#[test]
fn config_from_toml() {
    let config = SelfPlayConfig::from_toml_str(
        r#"
games = 3
seed = 17
engine_side = "black"

[engine]
depth = 1
"#,
    )
    .expect("valid config");

    assert_eq!(config.games, 3);
    assert_eq!(config.seed, Some(17));
    assert_eq!(config.engine_side, Color::Black);
    assert_eq!(config.engine.depth, 1);
    assert_eq!(config.max_moves, 200);
    assert_eq!(config.record_path, None);
}

#[test]
fn config_rejects_bad_types() {
    assert!(SelfPlayConfig::from_toml_str("games = \"many\"").is_err());
}

#[test]
fn run_saves_records() {
    let path = std::env::temp_dir().join(format!("selfplay_records_{}.json", std::process::id()));
    let mut config = SelfPlayConfig::default();
    config.engine.depth = 1;
    config.games = 2;
    config.max_moves = 30;
    config.seed = Some(3);
    config.engine_side = Color::Black;
    config.record_path = Some(path.clone());

    let records = run(&config).expect("self-play runs");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.black.starts_with("AlphaBeta")));
    assert!(records.iter().all(|r| r.moves.len() <= 30));

    let loaded = load_records(&path).expect("records were written");
    assert_eq!(loaded, records);
    std::fs::remove_file(&path).ok();

    let (wins, losses, draws) = tally(&records, Color::Black);
    assert_eq!(wins + losses + draws, 2);
}

#[test]
fn seeded_runs_repeat() {
    let mut config = SelfPlayConfig::default();
    config.engine.depth = 1;
    config.max_moves = 20;
    config.seed = Some(8);

    let a = run(&config).expect("self-play runs");
    let b = run(&config).expect("self-play runs");
    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].white, b[0].white);
}
