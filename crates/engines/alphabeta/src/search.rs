//! Negamax search with alpha-beta pruning and a capture-only quiescence
//! extension at the horizon.

use chess_core::Move;
use tracing::trace;

use crate::eval::{evaluate, MATE_SCORE};
use crate::state::PositionState;

/// Half-width of the root search window.
pub const ROOT_WINDOW: i32 = 100_000;

/// Starting best score at the root, below anything a child can return.
const ROOT_FLOOR: i32 = -99_999;

/// Captures-only search until the position is quiet. Fail-hard: the result
/// always lies within `[alpha, beta]`.
pub fn quiesce(state: &mut PositionState, mut alpha: i32, beta: i32) -> i32 {
    let moves = state.legal_moves();
    let stand_pat = evaluate(state, &moves);
    if stand_pat >= beta {
        return beta;
    }
    if alpha < stand_pat {
        alpha = stand_pat;
    }

    for mv in moves {
        if !state.position().is_capture(mv) {
            continue;
        }
        state.apply(mv);
        let score = -quiesce(state, -beta, -alpha);
        state.retract();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

/// Fixed-depth negamax, scored for the side to move. Fail-soft: a cutoff
/// returns the score that caused it.
///
/// A node with no legal moves returns the `-MATE_SCORE` floor, stalemate
/// included. Only the quiescence horizon tells the two apart.
pub fn alpha_beta(state: &mut PositionState, mut alpha: i32, beta: i32, depth_left: u8) -> i32 {
    if depth_left == 0 {
        return quiesce(state, alpha, beta);
    }

    let mut best = -MATE_SCORE;
    for mv in state.legal_moves() {
        state.apply(mv);
        let score = -alpha_beta(state, -beta, -alpha, depth_left - 1);
        state.retract();

        if score >= beta {
            return score;
        }
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
    }
    best
}

/// Searches every root move `depth` plies deep (at least one) and returns the
/// best one with its score. The first move reaching a score keeps it on ties.
///
/// Returns `None` when the side to move has no legal move.
pub fn search_root(state: &mut PositionState, depth: u8) -> Option<(Move, i32)> {
    let child_depth = depth.max(1) - 1;
    let mut alpha = -ROOT_WINDOW;
    let beta = ROOT_WINDOW;
    let mut best_score = ROOT_FLOOR;
    let mut best = None;

    for mv in state.legal_moves() {
        state.apply(mv);
        let score = -alpha_beta(state, -beta, -alpha, child_depth);
        state.retract();
        trace!(mv = %chess_core::move_to_uci(mv), score, "root move");

        if score > best_score {
            best_score = score;
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
