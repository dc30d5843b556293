use super::*;
use chess_core::{parse_uci_move, Color};

#[test]
fn test_search_start_position() {
    let mut engine = AlphaBetaEngine::new();
    let pos = Position::startpos();
    let result = engine.search(&pos, SearchLimits::depth(2));

    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&pos).contains(&mv));
    assert!(result.nodes > 0);
    assert!(!result.from_book);
    assert_eq!(result.depth, 2);
}

#[test]
fn test_default_limits_use_configured_depth() {
    let mut engine = AlphaBetaEngine::with_config(EngineConfig {
        depth: 1,
        ..EngineConfig::default()
    });
    let result = engine.search(&Position::startpos(), SearchLimits::default());
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 20);
}

#[test]
fn test_finds_mate_in_one() {
    let mut engine = AlphaBetaEngine::new();
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let result = engine.search(&pos, SearchLimits::depth(2));
    assert_eq!(result.best_move, parse_uci_move(&pos, "e1e8"));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn test_no_move_when_checkmated() {
    let mut engine = AlphaBetaEngine::new();
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert_eq!(engine.next_move(&pos), None);
    assert!(engine.history().is_empty());
}

#[test]
fn test_book_move_is_played_first() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "g1f3").unwrap();
    let mut book = WeightedBook::new();
    book.insert(&pos, mv, 1);

    let mut engine = AlphaBetaEngine::new().with_book(book);
    let result = engine.search(&pos, SearchLimits::depth(3));
    assert_eq!(result.best_move, Some(mv));
    assert!(result.from_book);
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_book_miss_falls_back_to_search() {
    let start = Position::startpos();
    let mut book = WeightedBook::new();
    book.insert(&start, parse_uci_move(&start, "e2e4").unwrap(), 1);

    let mut engine = AlphaBetaEngine::new().with_book(book);
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let result = engine.search(&pos, SearchLimits::depth(2));
    assert!(!result.from_book);
    assert_eq!(result.best_move, parse_uci_move(&pos, "e4d5"));
}

struct IllegalBook(Move);

impl OpeningBook for IllegalBook {
    fn weighted_lookup(&self, _pos: &Position) -> Result<Move, BookError> {
        Ok(self.0)
    }
}

#[test]
fn test_illegal_book_move_is_ignored() {
    let pos = Position::startpos();
    let mut engine = AlphaBetaEngine::new().with_book(IllegalBook(Move::new(12, 36)));
    let result = engine.search(&pos, SearchLimits::depth(1));
    assert!(!result.from_book);
    assert!(legal_moves(&pos).contains(&result.best_move.unwrap()));
}

#[test]
fn test_missing_book_file_plays_without_book() {
    let mut engine = AlphaBetaEngine::with_config(EngineConfig {
        depth: 1,
        book_path: Some("/no/such/book.toml".into()),
        ..EngineConfig::default()
    });
    let result = engine.search(&Position::startpos(), SearchLimits::default());
    assert!(result.best_move.is_some());
    assert!(!result.from_book);
}

#[test]
fn test_history_and_new_game() {
    let mut engine = AlphaBetaEngine::with_config(EngineConfig {
        depth: 1,
        ..EngineConfig::default()
    });
    let pos = Position::startpos();
    let first = engine.next_move(&pos).unwrap();
    let second = engine.next_move(&pos).unwrap();
    assert_eq!(engine.history(), &[first, second]);

    engine.new_game();
    assert!(engine.history().is_empty());
}

#[test]
fn test_reference_side_does_not_change_choice_score() {
    let pos = Position::from_fen("4k3/8/2n5/3q4/4P3/2N5/8/4K3 b - - 0 1");
    let mut white = AlphaBetaEngine::new();
    let mut black = AlphaBetaEngine::with_config(EngineConfig {
        reference_side: Color::Black,
        ..EngineConfig::default()
    });
    let a = white.search(&pos, SearchLimits::depth(2));
    let b = black.search(&pos, SearchLimits::depth(2));
    assert_eq!(a.score, b.score);
}

#[test]
fn test_config_from_toml() {
    let config = EngineConfig::from_toml_str("depth = 3\nreference_side = \"black\"\n").unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.reference_side, Color::Black);
    assert_eq!(config.book_path, None);

    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}
