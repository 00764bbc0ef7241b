//! Four-in-a-row detection over a board snapshot.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Number of aligned tokens needed to win.
pub const RUN_LENGTH: usize = 4;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Winner(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            _ => None,
        }
    }
}

/// A step across the grid as (row delta, column delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { d_row: 0, d_col: 1 };
    pub const VERTICAL: Direction = Direction { d_row: 1, d_col: 0 };
    pub const DIAGONAL_DOWN_RIGHT: Direction = Direction { d_row: 1, d_col: 1 };
    pub const DIAGONAL_DOWN_LEFT: Direction = Direction { d_row: 1, d_col: -1 };

    /// The four directions a run can extend in from its starting cell.
    pub const ALL: [Direction; 4] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL_DOWN_RIGHT,
        Direction::DIAGONAL_DOWN_LEFT,
    ];

    /// Position reached after `steps` steps from `(row, col)`, if it is on the board.
    fn offset(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let steps = steps as isize;
        let r = row as isize + self.d_row * steps;
        let c = col as isize + self.d_col * steps;
        if (0..ROWS as isize).contains(&r) && (0..COLS as isize).contains(&c) {
            Some((r as usize, c as usize))
        } else {
            None
        }
    }
}

/// Whether the run of [`RUN_LENGTH`] cells starting at `(row, col)` and
/// stepping in `dir` stays on the board and holds a single player's token.
pub fn run_from(board: &Board, row: usize, col: usize, dir: Direction) -> Option<Player> {
    let owner = board.cell_at(row, col).ok()?.owner()?;
    let target = owner.to_cell();
    (1..RUN_LENGTH)
        .all(|step| {
            dir.offset(row, col, step)
                .is_some_and(|(r, c)| board.get(r, c) == target)
        })
        .then_some(owner)
}

/// Find the first four-in-a-row on the board, scanning top-left to
/// bottom-right and trying each direction in [`Direction::ALL`] order.
pub fn find_winner(board: &Board) -> Option<Player> {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .filter(|&(row, col)| board.get(row, col) != Cell::Empty)
        .find_map(|(row, col)| {
            Direction::ALL
                .iter()
                .find_map(|&dir| run_from(board, row, col, dir))
        })
}

/// Classify the board. A win takes precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = find_winner(board) {
        Outcome::Winner(player)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
