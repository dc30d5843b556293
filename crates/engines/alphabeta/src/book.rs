//! Opening book: a weighted table of moves keyed by position.
//!
//! Books are TOML files of `[[entry]]` tables:
//!
//! ```toml
//! [[entry]]
//! fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//! move = "e2e4"
//! weight = 40
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chess_core::{parse_uci_move, Move, Position};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{thread_rng, Rng};
use serde::Deserialize;
use thiserror::Error;

/// Why a book produced no move.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("position not in book")]
    NotFound,
    #[error("opening book {} unavailable: {reason}", .path.display())]
    Unavailable { path: PathBuf, reason: String },
    #[error("malformed opening book: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("book move {mv:?} is not playable in {fen:?}")]
    InvalidEntry { fen: String, mv: String },
}

/// Source of precomputed opening moves.
pub trait OpeningBook {
    /// Pick one of the book moves for `pos`, favouring heavier entries.
    fn weighted_lookup(&self, pos: &Position) -> Result<Move, BookError>;
}

/// A book with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBook;

impl OpeningBook for NoBook {
    fn weighted_lookup(&self, _pos: &Position) -> Result<Move, BookError> {
        Err(BookError::NotFound)
    }
}

#[derive(Debug, Deserialize)]
struct BookFile {
    #[serde(default)]
    entry: Vec<BookEntry>,
}

#[derive(Debug, Deserialize)]
struct BookEntry {
    fen: String,
    #[serde(rename = "move")]
    mv: String,
    #[serde(default = "default_weight")]
    weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// In-memory book keyed by Zobrist hash.
#[derive(Debug, Clone, Default)]
pub struct WeightedBook {
    entries: HashMap<u64, Vec<(Move, u32)>>,
}

impl WeightedBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML book from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BookError::Unavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, BookError> {
        let file: BookFile = toml::from_str(text)?;
        let mut book = Self::new();
        for entry in file.entry {
            let invalid = || BookError::InvalidEntry {
                fen: entry.fen.clone(),
                mv: entry.mv.clone(),
            };
            let pos = Position::try_from_fen(&entry.fen).map_err(|_| invalid())?;
            let mv = parse_uci_move(&pos, &entry.mv).ok_or_else(invalid)?;
            book.insert(&pos, mv, entry.weight);
        }
        Ok(book)
    }

    /// Add `mv` for `pos`. Adding the same move twice sums the weights.
    pub fn insert(&mut self, pos: &Position, mv: Move, weight: u32) {
        let moves = self.entries.entry(pos.position_hash()).or_default();
        match moves.iter_mut().find(|(m, _)| *m == mv) {
            Some((_, w)) => *w = w.saturating_add(weight),
            None => moves.push((mv, weight)),
        }
    }

    /// Number of positions with at least one entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn moves(&self, pos: &Position) -> &[(Move, u32)] {
        self.entries
            .get(&pos.position_hash())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// [`OpeningBook::weighted_lookup`] drawing from a caller-supplied RNG.
    pub fn weighted_lookup_with<R: Rng + ?Sized>(&self, pos: &Position, rng: &mut R) -> Result<Move, BookError> {
        let moves = self.moves(pos);
        let dist = WeightedIndex::new(moves.iter().map(|(_, w)| *w)).map_err(|_| BookError::NotFound)?;
        Ok(moves[dist.sample(rng)].0)
    }
}

impl OpeningBook for WeightedBook {
    fn weighted_lookup(&self, pos: &Position) -> Result<Move, BookError> {
        self.weighted_lookup_with(pos, &mut thread_rng())
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
