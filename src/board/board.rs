//! Board structure with scoped placement

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::EngineError;

/// Square game board of `size x size` cells.
///
/// The board does not track turns or history. The engine borrows it mutably
/// for the duration of one move request and hands it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// Create an empty 15x15 board.
    pub fn with_default_size() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    /// Parse a board from text rows of `.`, `X` (Black) and `O` (White).
    ///
    /// Whitespace inside a row is ignored. The number of rows sets the board
    /// size and every row must have exactly that many cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, EngineError> {
        let mut board = Self::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            if cells.len() != board.size {
                return Err(EngineError::MalformedBoard(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    cells.len(),
                    board.size
                )));
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let stone = Stone::from_glyph(ch).ok_or_else(|| {
                    EngineError::MalformedBoard(format!("unknown cell '{}' at ({}, {})", ch, r, c))
                })?;
                board.cells[r * board.size + c] = stone;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Signed bounds check, for walking lines off the edge.
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.size && (pos.col as usize) < self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Place `stone` at the empty cell `pos` for as long as the returned guard lives.
    ///
    /// The guard derefs to the board, so it can be handed to anything that
    /// takes `&Board` or `&mut Board`. Dropping it clears the cell again, on
    /// every exit path.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, stone: Stone) -> Placed<'_> {
        debug_assert!(self.is_empty(pos), "scoped placement on occupied cell {}", pos);
        self.place_stone(pos, stone);
        Placed { board: self, pos }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Number of cells holding `stone`
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    #[inline]
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Stone::Empty)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let n = self.size;
        (0..n * n).map(move |idx| Pos::new((idx / n) as u8, (idx % n) as u8))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_empty(p)).collect()
    }

    /// Occupied cells with their stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions()
            .map(move |p| (p, self.get(p)))
            .filter(|(_, s)| s.is_player())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_default_size()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.get(Pos::new(row as u8, col as u8)).glyph())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A stone placed by `Board::place_scoped`, removed again on drop.
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placed<'_> {
    /// Cell this guard occupies
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
