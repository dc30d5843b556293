//! Game records, saved as JSON.

use std::path::Path;

use anyhow::Context;
use chess_core::{Color, Outcome};
use serde::{Deserialize, Serialize};

/// How a recorded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
    /// The configured ply limit ran out
    MoveLimit,
}

impl From<Outcome> for Termination {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Checkmate { .. } => Termination::Checkmate,
            Outcome::Stalemate => Termination::Stalemate,
            Outcome::InsufficientMaterial => Termination::InsufficientMaterial,
            Outcome::FiftyMoveRule => Termination::FiftyMoveRule,
            Outcome::ThreefoldRepetition => Termination::ThreefoldRepetition,
        }
    }
}

/// One move as played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Color,
    /// Long algebraic notation, e.g. `e2e4`
    pub uci: String,
    pub score: i32,
    pub nodes: u64,
    pub from_book: bool,
}

/// A complete game between the engine and its opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<MoveRecord>,
    pub termination: Termination,
    pub winner: Option<Color>,
    pub final_fen: String,
}

impl GameRecord {
    /// PGN-style result string.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }

    pub fn total_nodes(&self) -> u64 {
        self.moves.iter().map(|m| m.nodes).sum()
    }
}

/// Save records to a JSON file
pub fn save_records(records: &[GameRecord], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records).context("failed to serialize game records")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Load records from a JSON file
pub fn load_records(path: &Path) -> anyhow::Result<Vec<GameRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
