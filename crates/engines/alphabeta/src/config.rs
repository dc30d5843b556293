//! Engine configuration, usually read from the `[engine]` table of a TOML file.

use std::path::PathBuf;

use chess_core::Color;
use serde::{Deserialize, Serialize};

/// Search and book settings for [`AlphaBetaEngine`](crate::AlphaBetaEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched at the root. Zero is treated as one.
    pub depth: u8,
    /// Side the running evaluation is scored for.
    pub reference_side: Color,
    /// TOML opening book. `None` disables the book.
    pub book_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            reference_side: Color::White,
            book_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
