//! Zobrist hashing for chess positions.
//!
//! The hash keys the opening book and the repetition history kept by
//! [`crate::Game`]. It is the XOR of fixed random values for:
//! - each piece on each square (12 pieces × 64 squares)
//! - side to move
//! - each castling right
//! - the en passant file, when an en passant square is set
//!
//! Move counters are not hashed, so transpositions reached with different
//! clocks share a key.

use crate::{board::Position, types::*};

/// Pre-computed random values, generated at compile time from a fixed seed.
pub struct ZobristKeys {
    /// Indexed by `[color][piece_kind][square]`.
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// `[wk, wq, bk, bq]`
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    pub const fn new() -> Self {
        // xorshift64; any fixed seed works as long as it never changes,
        // since book files are keyed by these values at load time only.
        const fn next(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = next(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = next(state);
        let black_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = next(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = next(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Hash of a whole position, computed from scratch.
    pub fn hash(&self, pos: &Position) -> u64 {
        let mut h = 0u64;
        for sq in 0..64u8 {
            if let Some(pc) = pos.piece_at(sq) {
                h ^= self.piece_key(pc, sq);
            }
        }
        if pos.side_to_move == Color::Black {
            h ^= self.black_to_move;
        }
        let rights = [
            pos.castling.wk,
            pos.castling.wq,
            pos.castling.bk,
            pos.castling.bq,
        ];
        for (i, &on) in rights.iter().enumerate() {
            if on {
                h ^= self.castling[i];
            }
        }
        if let Some(ep) = pos.en_passant {
            h ^= self.en_passant[file_of(ep) as usize];
        }
        h
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
