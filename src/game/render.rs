//! Plain-text board rendering and the rules text shown to players.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, COLS};

/// Characters used to draw each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub player1: char,
    pub player2: char,
    pub empty: char,
}

impl Symbols {
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Player1 => self.player1,
            Cell::Player2 => self.player2,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            player1: 'X',
            player2: 'O',
            empty: '-',
        }
    }
}

/// Render the board: a header of 1-based column numbers, then one
/// `| c | c | ... |` line per row from top to bottom.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut out = String::new();

    for col in 1..=COLS {
        let _ = write!(out, "  {col} ");
    }
    out.push('\n');

    for row in board.rows() {
        out.push('|');
        for &cell in row {
            let _ = write!(out, " {} |", symbols.for_cell(cell));
        }
        out.push('\n');
    }

    out
}

/// How to play, using the given symbols for the two players.
pub fn instructions(symbols: &Symbols) -> String {
    format!(
        "Player 1 is {p1} and Player 2 is {p2}; Player 1 moves first.\n\
         Players take turns dropping a token into one of the {COLS} columns.\n\
         A token falls to the lowest empty slot of the chosen column, and a\n\
         full column cannot be chosen. The first player with four tokens in a\n\
         row horizontally, vertically, or diagonally wins. If the board fills\n\
         up with no four in a row, the game is a tie.",
        p1 = symbols.player1,
        p2 = symbols.player2,
    )
}
