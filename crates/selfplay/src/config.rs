//! Self-play configuration, loaded from TOML.
//!
//! ```toml
//! games = 2
//! max_moves = 300
//! seed = 7
//! record_path = "games.json"
//!
//! [engine]
//! depth = 3
//! book_path = "book.toml"
//! ```

use std::path::{Path, PathBuf};

use alphabeta_engine::EngineConfig;
use anyhow::Context;
use chess_core::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub engine: EngineConfig,
    /// Number of games to play
    pub games: u32,
    /// Plies per game before the game is called a draw
    pub max_moves: u32,
    /// Seed for the random mover; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Side the alpha-beta engine plays
    pub engine_side: Color,
    /// Where to write the JSON game records
    pub record_path: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            games: 1,
            max_moves: 200,
            seed: None,
            engine_side: Color::White,
            record_path: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid self-play config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}
