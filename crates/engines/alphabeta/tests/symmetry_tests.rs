//! A position and its colour-mirrored twin must search to the same score.
//!
//! The crowded middlegame case only runs when `FULL_SEARCH` is set.

use alphabeta_engine::{alpha_beta, search_root, PositionState, ROOT_WINDOW};
use chess_core::{Color, Position};

/// Flip the board vertically and swap the colours of every piece.
fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let board: Vec<String> = parts[0]
        .split('/')
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect())
        .collect();
    let side = if parts[1] == "w" { "b" } else { "w" };
    let castling: String = if parts[2] == "-" {
        "-".to_string()
    } else {
        let swapped: Vec<char> = parts[2].chars().map(swap_case).collect();
        ['K', 'Q', 'k', 'q']
            .iter()
            .filter(|c| swapped.contains(*c))
            .collect()
    };
    let ep = match parts[3] {
        "-" => "-".to_string(),
        sq => {
            let (file, rank) = sq.split_at(1);
            let rank = if rank == "3" { "6" } else { "3" };
            format!("{file}{rank}")
        }
    };
    format!("{} {side} {castling} {ep} 0 1", board.join("/"))
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}

const FULL_SEARCH_ENV: &str = "FULL_SEARCH";

const MIDDLEGAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const FENS: [&str; 4] = [
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "4k3/8/2n5/3q4/4P3/2N5/8/4K3 b - - 0 1",
    "r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1",
    "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
];

fn search_cases() -> Vec<&'static str> {
    let mut cases = FENS.to_vec();
    if std::env::var(FULL_SEARCH_ENV).is_ok() {
        cases.push(MIDDLEGAME);
    }
    cases
}

#[test]
fn mirror_fen_is_an_involution() {
    for fen in FENS.into_iter().chain([MIDDLEGAME]) {
        let back = mirror_fen(&mirror_fen(fen));
        assert_eq!(Position::from_fen(&back).board, Position::from_fen(fen).board);
    }
}

#[test]
fn root_scores_match_under_mirroring() {
    for fen in search_cases() {
        let mirrored = mirror_fen(fen);
        let mut a = PositionState::new(Position::from_fen(fen), Color::White);
        let mut b = PositionState::new(Position::from_fen(&mirrored), Color::White);

        let score_a = search_root(&mut a, 2).map(|(_, s)| s);
        let score_b = search_root(&mut b, 2).map(|(_, s)| s);
        assert_eq!(score_a, score_b, "{fen} vs {mirrored}");
    }
}

#[test]
fn alpha_beta_scores_match_under_mirroring() {
    for fen in search_cases() {
        let mirrored = mirror_fen(fen);
        let mut a = PositionState::new(Position::from_fen(fen), Color::White);
        let mut b = PositionState::new(Position::from_fen(&mirrored), Color::Black);
        assert_eq!(
            alpha_beta(&mut a, -ROOT_WINDOW, ROOT_WINDOW, 2),
            alpha_beta(&mut b, -ROOT_WINDOW, ROOT_WINDOW, 2),
            "{fen} vs {mirrored}"
        );
        assert_eq!(a.board_value(), b.board_value());
    }
}
