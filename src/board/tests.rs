use super::*;

#[test]
fn new_board_has_correct_piece_counts() {
    let board = Board::new();
    assert_eq!(board.pieces(Piece::Pawn, Color::White).count_ones(), 8);
    assert_eq!(board.pieces(Piece::Pawn, Color::Black).count_ones(), 8);
    assert_eq!(board.pieces(Piece::King, Color::White).count_ones(), 1);
    assert_eq!(board.occupied().count_ones(), 32);
    assert!(board.validate().is_ok());
}

#[test]
fn new_board_starting_rights_and_side() {
    let board = Board::new();
    assert_eq!(board.side_to_move, Color::White);
    assert!(board.has_kingside_castle(Color::White));
    assert!(board.has_queenside_castle(Color::White));
    assert!(board.has_kingside_castle(Color::Black));
    assert!(board.has_queenside_castle(Color::Black));
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn king_square_finds_both_kings() {
    let board = Board::new();
    assert_eq!(board.king_square(Color::White).to_string(), "e1");
    assert_eq!(board.king_square(Color::Black).to_string(), "e8");
}

#[test]
fn set_bb_updates_occupancy_and_piece_table() {
    let mut board = Board::new_empty();
    let e4 = Square::from_file_rank(4, 3);
    board.set_bb(Color::White, Piece::Knight, 1u64 << e4.index());
    assert_eq!(board.piece_at(e4), Some((Color::White, Piece::Knight)));
    assert_eq!(board.occupancy(Color::White), 1u64 << e4.index());
    assert_eq!(board.occupied(), 1u64 << e4.index());
}

#[test]
fn set_bb_keeps_zobrist_in_sync_with_full_recompute() {
    let mut board = Board::new();
    let from = Square::from_file_rank(4, 1); // e2
    let to = Square::from_file_rank(4, 3); // e4
    let pawns = board.bb(Color::White, Piece::Pawn);
    let moved = (pawns & !(1u64 << from.index())) | (1u64 << to.index());
    board.set_bb(Color::White, Piece::Pawn, moved);
    assert_eq!(board.zobrist, board.compute_zobrist_full());
}

#[test]
fn has_major_pieces_false_in_king_and_pawns_only_position() {
    let board: Board = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1".parse().unwrap();
    assert!(!board.has_major_pieces(Color::White));
    assert!(!board.has_major_pieces(Color::Black));
}

#[test]
fn has_major_pieces_true_with_a_rook() {
    let board: Board = "4k3/8/8/8/8/8/8/R3K3 w Q - 0 1".parse().unwrap();
    assert!(board.has_major_pieces(Color::White));
}

#[test]
fn repetition_count_starts_at_one_and_grows_with_history() {
    let mut board = Board::new();
    assert_eq!(board.repetition_count(), 1);
    let current = board.zobrist;
    board.history.push(current);
    assert_eq!(board.repetition_count(), 2);
    assert!(!board.is_threefold());
    board.history.push(current);
    assert_eq!(board.repetition_count(), 3);
    assert!(board.is_threefold());
}

#[test]
fn color_opposite_and_not_agree() {
    assert_eq!(Color::White.opposite(), Color::Black);
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!Color::Black, Color::White);
}

#[test]
fn display_round_trips_through_fen() {
    let board = Board::new();
    let rendered = format!("{board}");
    let reparsed: Board = rendered.parse().unwrap();
    assert_eq!(board, reparsed);
}
