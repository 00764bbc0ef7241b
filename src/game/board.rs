use std::fmt;

use super::player::Player;
use super::render::{self, Symbols};
use crate::error::{IndexOutOfRange, PlacementError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom.
///
/// Cells can only be written through [`Board::drop_token`], so empty cells in
/// a column always sit above the occupied ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, IndexOutOfRange> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(IndexOutOfRange { row, col })
    }

    /// Unchecked read for callers iterating within `0..ROWS` x `0..COLS`.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a token dropped into `col` would land on, or `None` if it can't.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, PlacementError> {
        if col >= COLS {
            return Err(PlacementError::ColumnOutOfRange { column: col as i64 });
        }

        if self.is_column_full(col) {
            return Err(PlacementError::ColumnFull { column: col });
        }

        let row = self
            .landing_row(col)
            .ok_or(PlacementError::ColumnFull { column: col })?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still accept a token.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Render the board as text using the given symbols.
    pub fn render_with(&self, symbols: &Symbols) -> String {
        render::render_board(self, symbols)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&Symbols::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.cell_at(row, col), Ok(Cell::Empty));
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_drop_token() {
        let mut board = Board::new();

        let row = board.drop_token(3, Player::Player1).unwrap();
        assert_eq!(row, 5); // Lands at the bottom
        assert_eq!(board.cell_at(5, 3), Ok(Cell::Player1));

        let row = board.drop_token(3, Player::Player2).unwrap();
        assert_eq!(row, 4); // Stacks on the first token
        assert_eq!(board.cell_at(4, 3), Ok(Cell::Player2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_token(0, Player::Player1).unwrap();
        }

        let before = board;
        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_token(0, Player::Player2),
            Err(PlacementError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_token(7, Player::Player1),
            Err(PlacementError::ColumnOutOfRange { column: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(6, 0), Err(IndexOutOfRange { row: 6, col: 0 }));
        assert_eq!(board.cell_at(0, 7), Err(IndexOutOfRange { row: 0, col: 7 }));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                board.drop_token(col, Player::Player1).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.occupied_count(), ROWS * COLS);
    }

    #[test]
    fn test_gravity_rows_strictly_decrease() {
        let mut board = Board::new();
        let rows: Vec<usize> = (0..ROWS)
            .map(|i| {
                let player = if i % 2 == 0 { Player::Player1 } else { Player::Player2 };
                board.drop_token(2, player).unwrap()
            })
            .collect();
        assert_eq!(rows, vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(board.landing_row(2), None);
    }

    #[test]
    fn test_legal_columns() {
        let mut board = Board::new();
        assert_eq!(board.legal_columns(), (0..COLS).collect::<Vec<_>>());
        for _ in 0..ROWS {
            board.drop_token(4, Player::Player2).unwrap();
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Player1.owner(), Some(Player::Player1));
        assert_eq!(Cell::Player2.owner(), Some(Player::Player2));
    }
}
