//! Material plus piece-square-table evaluation.
//!
//! The running total lives in [`EvalState`](crate::state::EvalState) and is
//! scored for a fixed reference side. [`move_delta`] prices a move from the
//! board before it is played, so the search never recomputes from scratch.

use chess_core::{rank_of, Color, Move, Piece, PieceKind, Position};

use crate::state::PositionState;
use crate::tables::{piece_value, square_value, GamePhase};

/// Score of the side to move when it is checkmated.
pub const MATE_SCORE: i32 = 9999;

#[inline]
fn sign(color: Color, reference: Color) -> i32 {
    if color == reference {
        1
    } else {
        -1
    }
}

/// Material plus table term of one piece, signed for `reference`.
#[inline]
fn piece_term(piece: Piece, sq: u8, phase: GamePhase, reference: Color) -> i32 {
    sign(piece.color, reference) * (piece_value(piece.kind) + square_value(piece, sq, phase))
}

/// From-scratch score of `pos` for `reference`, ignoring mate and draws.
pub fn material_and_tables(pos: &Position, reference: Color) -> i32 {
    let phase = GamePhase::from_non_king_count(pos.non_king_count());
    let mut score = 0;
    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            for sq in pos.pieces(kind, color) {
                score += piece_term(piece, sq, phase, reference);
            }
        }
    }
    score
}

/// Rook squares for a king moving `from` -> `to` when that is a castle.
fn castle_rook_jump(from: u8, to: u8) -> Option<(u8, u8)> {
    match (from, to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

/// The piece a pawn becomes on `mv`. `make_move` queens a pawn reaching
/// the last rank when the move names no piece.
fn promotion_kind(piece: Piece, mv: Move) -> Option<PieceKind> {
    let last_rank = match piece.color {
        Color::White => 7,
        Color::Black => 0,
    };
    if piece.kind != PieceKind::Pawn || rank_of(mv.to) != last_rank {
        return None;
    }
    Some(mv.promo.unwrap_or(PieceKind::Queen))
}

/// The piece `mv` removes from the board, and where it stood.
fn captured_piece(pos: &Position, mv: Move) -> Option<(Piece, u8)> {
    if mv.drop.is_some() {
        return None;
    }
    let sq = if mv.is_en_passant {
        match pos.side_to_move {
            Color::White => mv.to.checked_sub(8)?,
            Color::Black => mv.to + 8,
        }
    } else {
        mv.to
    };
    pos.piece_at(sq)
        .filter(|pc| pc.color != pos.side_to_move)
        .map(|pc| (pc, sq))
}

/// Change in [`material_and_tables`] that playing `mv` in `pos` causes.
///
/// Must be called before the move is applied. The result is additive over:
/// the implicit rook jump of a castle, the moved piece leaving `from` and
/// arriving on `to`, a captured piece leaving the board, a dropped piece
/// entering it, a promotion swapping pawn for the new piece, and both kings
/// being repriced when the endgame threshold is crossed.
pub fn move_delta(pos: &Position, mv: Move, reference: Color) -> i32 {
    let mover = pos.side_to_move;
    let s = sign(mover, reference);
    let captured = captured_piece(pos, mv);

    let count_before = pos.non_king_count();
    let mut count_after = count_before;
    if captured.is_some() {
        count_after -= 1;
    }
    if mv.drop.is_some_and(|k| k != PieceKind::King) {
        count_after += 1;
    }
    let before = GamePhase::from_non_king_count(count_before);
    let after = GamePhase::from_non_king_count(count_after);

    let moving = match mv.drop {
        Some(_) => None,
        None => pos.piece_at(mv.from),
    };

    let mut delta = 0;

    if let Some(piece) = moving {
        if piece.kind == PieceKind::King {
            if let Some((rook_from, rook_to)) = castle_rook_jump(mv.from, mv.to) {
                let rook = Piece::new(mover, PieceKind::Rook);
                delta += s * (square_value(rook, rook_to, after) - square_value(rook, rook_from, after));
            }
        }

        delta += s * (square_value(piece, mv.to, after) - square_value(piece, mv.from, before));
    }

    if let Some((piece, sq)) = captured {
        delta -= piece_term(piece, sq, before, reference);
    }

    if let Some(kind) = mv.drop {
        delta += piece_term(Piece::new(mover, kind), mv.to, after, reference);
    }

    if let Some((piece, promo)) = moving.and_then(|pc| promotion_kind(pc, mv).map(|k| (pc, k))) {
        let promoted = Piece::new(mover, promo);
        delta += s
            * (piece_value(promo) - piece_value(PieceKind::Pawn) + square_value(promoted, mv.to, after)
                - square_value(piece, mv.to, after));
    }

    if before != after {
        for color in Color::ALL {
            if moving.is_some_and(|pc| pc.kind == PieceKind::King && pc.color == color) {
                continue;
            }
            if let Some(ksq) = pos.king_sq(color) {
                let king = Piece::new(color, PieceKind::King);
                delta += sign(color, reference) * (square_value(king, ksq, after) - square_value(king, ksq, before));
            }
        }
    }

    delta
}

/// Signs a reference-side score for the side to move.
#[inline]
fn for_side_to_move(state: &PositionState, score: i32) -> i32 {
    score * sign(state.side_to_move(), state.reference_side())
}

/// Terminal-aware evaluation that recomputes the position from scratch and
/// resynchronises the running total. Scored for the side to move.
pub fn full_evaluate(state: &mut PositionState) -> i32 {
    let pos = state.position();
    if pos.is_checkmate() {
        return -MATE_SCORE;
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return 0;
    }

    let score = material_and_tables(pos, state.reference_side());
    state.resync(score);
    for_side_to_move(state, score)
}

/// Same result as [`full_evaluate`], read from the running total.
///
/// `legal_moves` must be the legal moves of the current position; an empty
/// list means mate or stalemate.
pub fn evaluate(state: &PositionState, legal_moves: &[Move]) -> i32 {
    let pos = state.position();
    if legal_moves.is_empty() {
        return if pos.in_check(pos.side_to_move) { -MATE_SCORE } else { 0 };
    }
    if pos.is_insufficient_material() {
        return 0;
    }

    debug_assert_eq!(
        state.board_value(),
        material_and_tables(pos, state.reference_side()),
        "running evaluation drifted from the board"
    );
    for_side_to_move(state, state.board_value())
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
