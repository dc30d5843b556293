//! Self-play for the alpha-beta engine
//!
//! This crate provides:
//! - A game loop pairing any two `chess_core::Engine`s
//! - Self-play of the alpha-beta engine against a random mover
//! - JSON game records
//!
//! # Usage
//!
//! ```bash
//! cargo run -p selfplay -- --depth 3 --games 4 --seed 7 --record games.json
//! cargo run -p selfplay -- --config selfplay.toml
//! ```

mod config;
mod record;
mod runner;

pub use config::*;
pub use record::*;
pub use runner::*;

use alphabeta_engine::AlphaBetaEngine;
use chess_core::Color;
use random_engine::RandomMover;
use tracing::info;

/// Play `config.games` games of the engine against a random mover, saving the
/// records when a path is configured.
pub fn run(config: &SelfPlayConfig) -> anyhow::Result<Vec<GameRecord>> {
    let mut engine = AlphaBetaEngine::with_config(config.engine.clone());
    let mut opponent = match config.seed {
        Some(seed) => RandomMover::with_seed(seed),
        None => RandomMover::new(),
    };
    let runner = GameRunner::new(config.max_moves);

    let mut records = Vec::with_capacity(config.games as usize);
    for game_num in 0..config.games {
        info!(game = game_num + 1, of = config.games, "starting game");
        let record = match config.engine_side {
            Color::White => runner.play_game(&mut engine, &mut opponent),
            Color::Black => runner.play_game(&mut opponent, &mut engine),
        };
        records.push(record);
    }

    if let Some(path) = &config.record_path {
        save_records(&records, path)?;
        info!(path = %path.display(), games = records.len(), "records saved");
    }
    Ok(records)
}

/// Wins, losses and draws for the side the engine played.
pub fn tally(records: &[GameRecord], engine_side: Color) -> (u32, u32, u32) {
    let mut score = (0, 0, 0);
    for record in records {
        match record.winner {
            Some(c) if c == engine_side => score.0 += 1,
            Some(_) => score.1 += 1,
            None => score.2 += 1,
        }
    }
    score
}
