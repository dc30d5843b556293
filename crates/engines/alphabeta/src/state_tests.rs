use super::*;
use chess_core::{legal_moves, parse_uci_move, PieceKind};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_new_seeds_running_value() {
    let pos = Position::from_fen(KIWIPETE);
    let expected = material_and_tables(&pos, Color::White);
    let state = PositionState::new(pos, Color::White);
    assert_eq!(state.board_value(), expected);
    assert_eq!(state.ply(), 0);
}

#[test]
fn test_apply_retract_restores_everything() {
    let start = Position::from_fen(KIWIPETE);
    let mut state = PositionState::new(start.clone(), Color::White);
    let value = state.board_value();

    for mv in legal_moves(&start) {
        state.apply(mv);
        assert_eq!(
            state.board_value(),
            material_and_tables(state.position(), Color::White)
        );
        assert_eq!(state.retract(), Some(mv));
        assert_eq!(state.board_value(), value);
        assert_eq!(state.position(), &start);
    }
}

#[test]
fn test_hand_built_promotion_keeps_value_in_sync() {
    let start = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mut state = PositionState::new(start.clone(), Color::White);
    let value = state.board_value();

    state.apply(Move::new(48, 56));
    assert_eq!(state.position().piece_kind_at(56), Some(PieceKind::Queen));
    assert_eq!(
        state.board_value(),
        material_and_tables(state.position(), Color::White)
    );
    state.retract();
    assert_eq!(state.board_value(), value);
    assert_eq!(state.position(), &start);
}

#[test]
fn test_nested_apply_retract_is_lifo() {
    let start = Position::startpos();
    let mut state = PositionState::new(start.clone(), Color::Black);
    let line = ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3"];

    let mut values = vec![state.board_value()];
    for uci in line {
        let mv = parse_uci_move(state.position(), uci).expect("legal line");
        state.apply(mv);
        values.push(state.board_value());
    }
    assert_eq!(state.ply(), line.len());
    assert_eq!(state.position().non_king_count(), 28);

    while state.retract().is_some() {
        values.pop();
        assert_eq!(Some(&state.board_value()), values.last());
    }
    assert_eq!(state.position(), &start);
    assert_eq!(state.board_value(), 0);
}

#[test]
fn test_retract_without_moves() {
    let mut state = PositionState::new(Position::startpos(), Color::White);
    assert_eq!(state.retract(), None);
    assert_eq!(state.board_value(), 0);
}

#[test]
fn test_nodes_count_applied_moves() {
    let mut state = PositionState::new(Position::startpos(), Color::White);
    for mv in state.legal_moves() {
        state.apply(mv);
        state.retract();
    }
    assert_eq!(state.nodes(), 20);
    state.reset_nodes();
    assert_eq!(state.nodes(), 0);
}

#[test]
fn test_drop_round_trip() {
    let start = Position::from_fen("4k3/ppp5/8/8/8/8/PP6/4K3 w - - 0 1");
    let mut state = PositionState::new(start.clone(), Color::White);
    let value = state.board_value();

    state.apply(Move::drop(PieceKind::Rook, 27));
    assert_eq!(
        state.board_value(),
        material_and_tables(state.position(), Color::White)
    );
    state.retract();
    assert_eq!(state.board_value(), value);
    assert_eq!(state.position(), &start);
}

#[test]
fn test_eval_state_records() {
    let mut eval = EvalState::new(10);
    eval.apply(5);
    eval.apply(-20);
    assert_eq!(eval.board_value(), -5);
    eval.retract();
    assert_eq!(eval.board_value(), 15);
    eval.retract();
    assert_eq!(eval.board_value(), 10);
    eval.retract();
    assert_eq!(eval.board_value(), 10);
}
