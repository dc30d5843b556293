//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. It stands in for the opponent in
//! self-play and is the baseline any searching engine should beat.

use chess_core::{legal_moves, Engine, Move, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly chosen legal move, or `None` if the game is over.
    pub fn random_move(&mut self, pos: &Position) -> Option<Move> {
        legal_moves(pos).choose(&mut self.rng).copied()
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomMover {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let best_move = self.random_move(pos);
        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 0,
            from_book: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
