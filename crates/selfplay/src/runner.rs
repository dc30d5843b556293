//! Game loop pairing two engines.

use chess_core::{move_to_uci, Color, Engine, Game, SearchLimits};
use tracing::{debug, info};

use crate::record::{GameRecord, MoveRecord, Termination};

/// Plays games between two engines up to a ply limit.
pub struct GameRunner {
    max_moves: u32,
}

impl GameRunner {
    pub fn new(max_moves: u32) -> Self {
        Self { max_moves }
    }

    /// Play a single game from the start position.
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut game = Game::startpos();
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let mut termination = Termination::MoveLimit;
        let mut winner = None;

        for _ply in 0..self.max_moves {
            if let Some(outcome) = game.outcome() {
                termination = outcome.into();
                winner = outcome.winner();
                break;
            }

            let side = game.side_to_move();
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let result = engine.search(game.position(), SearchLimits::default());

            // `outcome` already ruled out positions without moves.
            let Some(mv) = result.best_move else {
                break;
            };
            let uci = move_to_uci(mv);
            debug!(ply = game.ply(), ?side, mv = %uci, score = result.score, "move");
            moves.push(MoveRecord {
                side,
                uci,
                score: result.score,
                nodes: result.nodes,
                from_book: result.from_book,
            });
            game.push(mv);
        }

        // The last move may have ended the game exactly at the limit.
        if termination == Termination::MoveLimit {
            if let Some(outcome) = game.outcome() {
                termination = outcome.into();
                winner = outcome.winner();
            }
        }

        let record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves,
            termination,
            winner,
            final_fen: game.position().to_fen(),
        };
        info!(
            result = record.result(),
            termination = ?record.termination,
            plies = record.moves.len(),
            "game over"
        );
        record
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
