//! Alpha-Beta Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning over a material and
//! piece-square-table evaluation that is updated move by move.
//! Positions found in the opening book are answered from the book.

mod book;
mod config;
mod eval;
mod search;
mod state;
mod tables;

use chess_core::{legal_moves, move_to_uci, Engine, Move, Position, SearchLimits, SearchResult};
use tracing::{debug, warn};

pub use book::{BookError, NoBook, OpeningBook, WeightedBook};
pub use config::EngineConfig;
pub use eval::{evaluate, full_evaluate, material_and_tables, move_delta, MATE_SCORE};
pub use search::{alpha_beta, quiesce, search_root, ROOT_WINDOW};
pub use state::{EvalState, PositionState};
pub use tables::{king_table, piece_value, GamePhase, ENDGAME_PIECE_LIMIT};

/// Chess engine that consults an opening book, then searches.
///
/// This engine uses:
/// - A weighted opening book, when one is configured
/// - Negamax search with alpha-beta pruning to a fixed depth
/// - Capture-only quiescence search at the horizon
/// - Incrementally updated material + piece-square-table evaluation
pub struct AlphaBetaEngine {
    config: EngineConfig,
    book: Box<dyn OpeningBook + Send>,
    /// Moves this engine has chosen since the last `new_game`
    history: Vec<Move>,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Build an engine from `config`. An unreadable book is logged and the
    /// engine plays without one.
    pub fn with_config(config: EngineConfig) -> Self {
        let book: Box<dyn OpeningBook + Send> = match &config.book_path {
            Some(path) => match WeightedBook::load(path) {
                Ok(book) => {
                    debug!(path = %path.display(), positions = book.len(), "opening book loaded");
                    Box::new(book)
                }
                Err(e) => {
                    warn!(error = %e, "playing without opening book");
                    Box::new(NoBook)
                }
            },
            None => Box::new(NoBook),
        };
        Self {
            config,
            book,
            history: Vec::new(),
            nodes: 0,
        }
    }

    pub fn with_book(mut self, book: impl OpeningBook + Send + 'static) -> Self {
        self.book = Box::new(book);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves chosen since the last `new_game`, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Choose a move at the configured depth. `None` when the side to move
    /// has no legal move.
    pub fn next_move(&mut self, pos: &Position) -> Option<Move> {
        self.choose(pos, self.config.depth).best_move
    }

    fn book_move(&self, pos: &Position) -> Option<Move> {
        match self.book.weighted_lookup(pos) {
            Ok(mv) if legal_moves(pos).contains(&mv) => Some(mv),
            Ok(mv) => {
                warn!(mv = %move_to_uci(mv), "ignoring illegal book move");
                None
            }
            Err(BookError::NotFound) => None,
            Err(e) => {
                debug!(error = %e, "book miss");
                None
            }
        }
    }

    fn choose(&mut self, pos: &Position, depth: u8) -> SearchResult {
        if let Some(mv) = self.book_move(pos) {
            debug!(mv = %move_to_uci(mv), "book move");
            self.history.push(mv);
            self.nodes = 0;
            return SearchResult {
                best_move: Some(mv),
                score: 0,
                depth: 0,
                nodes: 0,
                from_book: true,
            };
        }

        let depth = depth.max(1);
        let mut state = PositionState::new(pos.clone(), self.config.reference_side);
        let best = search_root(&mut state, depth);
        self.nodes = state.nodes();

        if let Some((mv, score)) = best {
            debug!(mv = %move_to_uci(mv), score, depth, nodes = self.nodes, "search finished");
            self.history.push(mv);
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
            from_book: false,
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let depth = if limits.depth > 0 {
            limits.depth
        } else {
            self.config.depth
        };
        self.choose(pos, depth)
    }

    fn name(&self) -> &str {
        "AlphaBeta PST v1.0"
    }

    fn new_game(&mut self) {
        self.history.clear();
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
