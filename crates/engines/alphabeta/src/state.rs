//! The position being searched together with its running evaluation.

use chess_core::{Color, Game, Move, Position};

use crate::eval::{material_and_tables, move_delta};

/// One applied move's effect on the running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EvalRecord {
    delta: i32,
    prior: i32,
}

/// Running material + table score, scored for a fixed reference side.
#[derive(Clone, Debug, Default)]
pub struct EvalState {
    board_value: i32,
    undo: Vec<EvalRecord>,
}

impl EvalState {
    pub fn new(board_value: i32) -> Self {
        Self {
            board_value,
            undo: Vec::with_capacity(64),
        }
    }

    pub fn board_value(&self) -> i32 {
        self.board_value
    }

    fn apply(&mut self, delta: i32) {
        let prior = self.board_value;
        self.undo.push(EvalRecord { delta, prior });
        self.board_value = prior + delta;
    }

    fn retract(&mut self) {
        if let Some(record) = self.undo.pop() {
            debug_assert_eq!(record.prior + record.delta, self.board_value);
            self.board_value = record.prior;
        }
    }
}

/// A game owned by the search plus the evaluation kept in step with it.
///
/// Moves go through [`apply`](Self::apply) and [`retract`](Self::retract) in
/// strict LIFO order; the board and the running total are restored together.
#[derive(Clone, Debug)]
pub struct PositionState {
    game: Game,
    eval: EvalState,
    reference: Color,
    nodes: u64,
}

impl PositionState {
    pub fn new(pos: Position, reference: Color) -> Self {
        let eval = EvalState::new(material_and_tables(&pos, reference));
        Self {
            game: Game::new(pos),
            eval,
            reference,
            nodes: 0,
        }
    }

    pub fn position(&self) -> &Position {
        self.game.position()
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }

    /// The side `board_value` is scored for.
    pub fn reference_side(&self) -> Color {
        self.reference
    }

    pub fn board_value(&self) -> i32 {
        self.eval.board_value()
    }

    /// Moves applied since creation or the last [`reset_nodes`](Self::reset_nodes).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Number of applied moves not yet retracted.
    pub fn ply(&self) -> usize {
        self.game.ply()
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.game.legal_moves()
    }

    /// Play `mv`, pricing it against the board before it moves.
    pub fn apply(&mut self, mv: Move) {
        let delta = move_delta(self.game.position(), mv, self.reference);
        self.eval.apply(delta);
        self.game.push(mv);
        self.nodes += 1;
    }

    /// Take back the most recent move.
    pub fn retract(&mut self) -> Option<Move> {
        let mv = self.game.pop()?;
        self.eval.retract();
        Some(mv)
    }

    /// Overwrite the running total with a full recomputation.
    pub(crate) fn resync(&mut self, board_value: i32) {
        self.eval.board_value = board_value;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
