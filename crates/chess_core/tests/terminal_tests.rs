//! End-of-game checks the search and the self-play loop rely on.

use chess_core::{legal_moves, parse_uci_move, Color, Game, Outcome, Position};

struct Terminal {
    fen: &'static str,
    checkmate: bool,
    stalemate: bool,
}

const NO_MOVES: [Terminal; 4] = [
    // Fool's mate
    Terminal {
        fen: "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        checkmate: true,
        stalemate: false,
    },
    // Back-rank mate
    Terminal {
        fen: "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1",
        checkmate: true,
        stalemate: false,
    },
    Terminal {
        fen: "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1",
        checkmate: false,
        stalemate: true,
    },
    // King and pawn box in the lone king
    Terminal {
        fen: "5k2/5P2/5K2/8/8/8/8/8 b - - 0 1",
        checkmate: false,
        stalemate: true,
    },
];

#[test]
fn positions_without_moves_are_mate_or_stalemate() {
    for case in NO_MOVES {
        let pos = Position::from_fen(case.fen);
        assert!(legal_moves(&pos).is_empty(), "{}", case.fen);
        assert_eq!(pos.is_checkmate(), case.checkmate, "{}", case.fen);
        assert_eq!(pos.is_stalemate(), case.stalemate, "{}", case.fen);
    }
}

#[test]
fn check_with_an_escape_is_neither() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(pos.in_check(Color::Black));
    assert!(!legal_moves(&pos).is_empty());
    assert!(!pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn insufficient_material_cases() {
    let drawn = [
        "8/8/8/3k4/8/3K4/8/8 w - - 0 1",
        "8/8/8/3k4/8/3K4/3N4/8 b - - 0 1",
        "8/8/3b4/3k4/8/3K4/8/8 w - - 0 1",
        // Every bishop on a dark square
        "5b2/8/8/3k4/8/3K4/8/2B5 w - - 0 1",
    ];
    let playable = [
        "8/8/8/3k4/8/3K4/3P4/8 w - - 0 1",
        "8/8/8/3k4/8/3K4/8/3R4 w - - 0 1",
        "8/8/8/3k4/8/3K4/2NN4/8 w - - 0 1",
        "2b5/8/8/3k4/8/3K4/8/2B5 w - - 0 1",
        "3qk3/8/8/8/8/8/8/4K3 w - - 0 1",
    ];
    for fen in drawn {
        assert!(Position::from_fen(fen).is_insufficient_material(), "{fen}");
    }
    for fen in playable {
        assert!(!Position::from_fen(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn last_capture_ends_the_game_and_pop_reopens_it() {
    let mut game = Game::new(Position::from_fen("8/8/8/3k4/8/3K4/5p2/7N w - - 0 1"));
    assert_eq!(game.outcome(), None);

    game.push(parse_uci_move(game.position(), "h1f2").expect("knight takes pawn"));
    assert_eq!(game.outcome(), Some(Outcome::InsufficientMaterial));

    assert_eq!(game.pop().map(|mv| mv.to), Some(13));
    assert_eq!(game.outcome(), None);
}

#[test]
fn repetition_counts_positions_reached_through_the_game() {
    let mut game = Game::startpos();
    let loop_moves = ["b1c3", "b8c6", "c3b1", "c6b8"];

    for round in 0..2 {
        for uci in loop_moves {
            assert!(!game.is_threefold_repetition(), "round {round} before {uci}");
            game.push(parse_uci_move(game.position(), uci).expect("legal"));
        }
    }
    assert!(game.is_threefold_repetition());
    assert_eq!(game.outcome(), Some(Outcome::ThreefoldRepetition));
    assert_eq!(game.outcome().and_then(Outcome::winner), None);

    game.pop();
    assert!(!game.is_threefold_repetition());
    assert_eq!(game.ply(), 7);
}

#[test]
fn mate_outcome_names_the_winner() {
    let mut game = Game::new(Position::from_fen(NO_MOVES[1].fen));
    assert_eq!(game.outcome(), Some(Outcome::Checkmate { winner: Color::White }));

    let mut game = Game::new(Position::from_fen(NO_MOVES[2].fen));
    assert_eq!(game.outcome(), Some(Outcome::Stalemate));
}
