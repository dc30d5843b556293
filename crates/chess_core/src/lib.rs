pub mod bitboard;
pub mod board;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use bitboard::*;
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait — implemented by every move picker (alpha-beta, random, ...)
// =============================================================================

/// Limits for a single search call.
///
/// Searches are fixed-depth; there is no clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies. Zero means "use the engine's configured depth".
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(0)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective.
    /// Zero for book and random moves.
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Number of moves applied during the search
    pub nodes: u64,
    /// The move came from an opening book rather than a search
    pub from_book: bool,
}

/// Trait that all move pickers implement, so game loops can pair any two.
pub trait Engine: Send {
    /// Choose a move for the side to move in `pos`.
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
