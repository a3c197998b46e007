use super::*;
use crate::error::EngineError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_board_validity() {
    let board = Board::with_default_size();
    assert!(board.contains(0, 0));
    assert!(board.contains(14, 14));
    assert!(board.contains(7, 7));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(15, 0));
    assert!(!board.contains(0, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_BOARD_SIZE, 15);
    assert_eq!(Board::default().size(), 15);
    assert!(MIN_BOARD_SIZE >= 5);
}

#[test]
fn test_board_size_bounds() {
    assert_eq!(Board::new(4), Err(EngineError::InvalidBoardSize(4)));
    assert_eq!(
        Board::new(MAX_BOARD_SIZE + 1),
        Err(EngineError::InvalidBoardSize(MAX_BOARD_SIZE + 1))
    );
    assert_eq!(Board::new(19).map(|b| b.size()), Ok(19));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::with_default_size();
    let pos = Pos::new(3, 4);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.count(Stone::White), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_scoped_placement_restores_cell() {
    let mut board = Board::with_default_size();
    let pos = Pos::new(7, 7);
    {
        let placed = board.place_scoped(pos, Stone::Black);
        assert_eq!(placed.get(pos), Stone::Black);
        assert_eq!(placed.pos(), pos);
    }
    assert!(board.is_empty(pos));
}

#[test]
fn test_nested_scoped_placement() {
    let mut board = Board::with_default_size();
    let before = board.clone();
    {
        let mut outer = board.place_scoped(Pos::new(1, 1), Stone::Black);
        let inner = outer.place_scoped(Pos::new(1, 2), Stone::White);
        assert_eq!(inner.stone_count(), 2);
    }
    assert_eq!(board, before);
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::from_rows(&[
        "X....", //
        ".....",
        ".....",
        ".....",
        "....O",
    ])
    .unwrap();
    let empties = board.empty_cells();
    assert_eq!(empties.len(), 23);
    assert_eq!(empties[0], Pos::new(0, 1));
    assert_eq!(*empties.last().unwrap(), Pos::new(4, 3));

    let occupied: Vec<_> = board.occupied().collect();
    assert_eq!(
        occupied,
        vec![(Pos::new(0, 0), Stone::Black), (Pos::new(4, 4), Stone::White)]
    );
}

#[test]
fn test_from_rows_rejects_ragged_rows() {
    let err = Board::from_rows(&[".....", "....", ".....", ".....", "....."]).unwrap_err();
    assert!(matches!(err, EngineError::MalformedBoard(_)));
}

#[test]
fn test_from_rows_rejects_unknown_glyph() {
    let err = Board::from_rows(&[".....", "..Z..", ".....", ".....", "....."]).unwrap_err();
    assert!(matches!(err, EngineError::MalformedBoard(_)));
}

#[test]
fn test_display_roundtrips_through_from_rows() {
    let rows = ["X....", ".O...", "..X..", ".....", "....O"];
    let board = Board::from_rows(&rows).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, rows);
}
