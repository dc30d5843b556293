//! A position plus the stack of moves that led to it.
//!
//! [`Game`] gives the rules engine LIFO apply/retract semantics: `push` plays
//! a move and remembers how to undo it, `pop` takes back the most recent one.
//! It also keeps the hash of every position reached so repetitions can be
//! detected by game loops.

use crate::{
    board::{Position, Undo},
    movegen::legal_moves_into,
    types::{Color, Move},
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
    stack: Vec<(Move, Undo)>,
    /// Hash of every position reached, the current one last.
    hashes: Vec<u64>,
}

impl Game {
    pub fn new(pos: Position) -> Self {
        let hashes = vec![pos.position_hash()];
        Self {
            pos,
            stack: Vec::with_capacity(64),
            hashes,
        }
    }

    pub fn startpos() -> Self {
        Self::new(Position::startpos())
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn side_to_move(&self) -> Color {
        self.pos.side_to_move
    }

    /// Number of moves currently on the undo stack.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|(mv, _)| *mv)
    }

    /// Play `mv`. Legality is not checked.
    pub fn push(&mut self, mv: Move) {
        let undo = self.pos.make_move(mv);
        self.stack.push((mv, undo));
        self.hashes.push(self.pos.position_hash());
    }

    /// Take back the most recent move, returning it.
    pub fn pop(&mut self) -> Option<Move> {
        let (mv, undo) = self.stack.pop()?;
        self.pos.unmake_move(mv, undo);
        self.hashes.pop();
        Some(mv)
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        legal_moves_into(&mut self.pos, &mut out);
        out
    }

    pub fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        legal_moves_into(&mut self.pos, out);
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let Some(&current) = self.hashes.last() else {
            return false;
        };
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }

    /// The result if the game is over, counting claimable draws.
    pub fn outcome(&mut self) -> Option<Outcome> {
        let no_moves = self.legal_moves().is_empty();
        let stm = self.pos.side_to_move;
        if no_moves {
            return Some(if self.pos.in_check(stm) {
                Outcome::Checkmate { winner: stm.other() }
            } else {
                Outcome::Stalemate
            });
        }
        if self.pos.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if self.pos.is_fifty_move_draw() {
            Some(Outcome::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(Outcome::ThreefoldRepetition)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
