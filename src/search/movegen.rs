//! Candidate move generation with proximity filtering
//!
//! Only empty cells near existing stones are worth searching. This keeps the
//! branching factor at a few dozen instead of the whole board.

use crate::board::{Board, Pos};

/// Chebyshev radius around a stone inside which empty cells become candidates.
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Half-width of the central box used when no stone has neighbors to offer.
pub const CENTER_RADIUS: i32 = 2;

/// Generate candidate moves for the current position, in row-major order.
///
/// 1. Empty cells within `NEIGHBOR_RADIUS` of any stone
/// 2. Otherwise, empty cells within `CENTER_RADIUS` of the center
/// 3. Otherwise, every empty cell
///
/// Non-empty whenever the board has at least one empty cell.
pub fn candidates(board: &Board) -> Vec<Pos> {
    let n = board.size();
    let mut near = vec![false; n * n];
    let mut any_stone = false;

    for (pos, _) in board.occupied() {
        any_stone = true;
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if board.contains(r, c) {
                    #[allow(clippy::cast_sign_loss)]
                    let idx = r as usize * n + c as usize;
                    near[idx] = true;
                }
            }
        }
    }

    if any_stone {
        let moves: Vec<Pos> = board
            .positions()
            .filter(|&p| near[p.row as usize * n + p.col as usize] && board.is_empty(p))
            .collect();
        if !moves.is_empty() {
            return moves;
        }
    }

    let empties = board.empty_cells();
    let center = (n / 2) as i32;
    let central: Vec<Pos> = empties
        .iter()
        .copied()
        .filter(|p| {
            (i32::from(p.row) - center).abs() <= CENTER_RADIUS
                && (i32::from(p.col) - center).abs() <= CENTER_RADIUS
        })
        .collect();

    if central.is_empty() {
        empties
    } else {
        central
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use proptest::prelude::*;

    fn chebyshev(a: Pos, b: Pos) -> i32 {
        (i32::from(a.row) - i32::from(b.row))
            .abs()
            .max((i32::from(a.col) - i32::from(b.col)).abs())
    }

    #[test]
    fn test_empty_board_uses_center_box() {
        let board = Board::with_default_size();
        let moves = candidates(&board);
        assert_eq!(moves.len(), 25);
        assert_eq!(moves[0], Pos::new(5, 5));
        assert_eq!(moves[24], Pos::new(9, 9));
    }

    #[test]
    fn test_single_stone_neighborhood() {
        let mut board = Board::with_default_size();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = candidates(&board);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(7, 7)));
        assert!(moves.iter().all(|&m| chebyshev(m, Pos::new(7, 7)) <= 2));
    }

    #[test]
    fn test_corner_stone_clipped_by_edges() {
        let mut board = Board::with_default_size();
        board.place_stone(Pos::new(0, 0), Stone::White);
        let moves = candidates(&board);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_candidates_are_row_major() {
        let mut board = Board::with_default_size();
        board.place_stone(Pos::new(3, 3), Stone::Black);
        board.place_stone(Pos::new(10, 10), Stone::White);
        let moves = candidates(&board);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_full_neighborhood_falls_back_to_remaining_empties() {
        // One hole left on an otherwise full board
        let mut board = Board::new(5).unwrap();
        for p in board.positions().collect::<Vec<_>>() {
            board.place_stone(p, Stone::Black);
        }
        board.remove_stone(Pos::new(4, 4));
        assert_eq!(candidates(&board), vec![Pos::new(4, 4)]);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(5).unwrap();
        for p in board.positions().collect::<Vec<_>>() {
            board.place_stone(p, Stone::White);
        }
        assert!(candidates(&board).is_empty());
    }

    fn board_strategy(size: usize) -> impl Strategy<Value = Board> {
        proptest::collection::vec(0u8..3, size * size).prop_map(move |cells| {
            let mut board = Board::new(size).unwrap();
            let positions: Vec<Pos> = board.positions().collect();
            for (pos, cell) in positions.into_iter().zip(cells) {
                match cell {
                    1 => board.place_stone(pos, Stone::Black),
                    2 => board.place_stone(pos, Stone::White),
                    _ => {}
                }
            }
            board
        })
    }

    proptest! {
        #[test]
        fn candidates_are_empty_cells(board in board_strategy(7)) {
            let moves = candidates(&board);
            prop_assert!(moves.iter().all(|&m| board.is_empty(m)));
            prop_assert_eq!(moves.is_empty(), !board.has_empty());
        }

        #[test]
        fn candidates_are_near_stones(board in board_strategy(9)) {
            prop_assume!(!board.is_board_empty() && board.has_empty());
            let stones: Vec<Pos> = board.occupied().map(|(p, _)| p).collect();
            for m in candidates(&board) {
                prop_assert!(stones.iter().any(|&s| chebyshev(s, m) <= NEIGHBOR_RADIUS));
            }
        }
    }
}
