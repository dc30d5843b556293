//! Long algebraic move notation (`e2e4`, `e7e8q`, `N@e4` for drops).

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    if let Some(kind) = mv.drop {
        return format!("{}@{}", kind.to_char().to_ascii_uppercase(), sq_to_coord(mv.to));
    }
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.to_char());
    }
    s
}

/// Finds the legal move in `pos` written as `txt`.
///
/// Matching against the generated moves fills in the castle and en passant
/// flags. Drops are never legal in standard chess, so `N@e4` yields `None`.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.chars().nth(4) {
        Some(c) => Some(PieceKind::from_char(c).filter(|k| {
            !matches!(k, PieceKind::Pawn | PieceKind::King)
        })?),
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}
