use std::fmt;

use tracing::{debug, info};

use super::board::{Board, Cell, COLS};
use super::player::Player;
use super::render::{self, Symbols};
use super::state::{TurnController, TurnState};
use super::win::{self, Outcome};
use crate::error::{IndexOutOfRange, MoveError};

/// A single game of Connect Four.
///
/// All mutation goes through [`GameEngine::make_move`]; a rejected move
/// leaves the game exactly as it was. Once a game ends it stays read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turns: TurnController,
}

impl GameEngine {
    /// Start a fresh game: empty board, Player 1 to move.
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            turns: TurnController::new(),
        }
    }

    /// Drop the current player's token into a zero-based `column`.
    pub fn make_move(&mut self, column: i64) -> Result<(), MoveError> {
        let player = self.turns.active_player().ok_or(MoveError::GameAlreadyOver)?;

        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(MoveError::ColumnOutOfRange { column })?;

        let row = self.board.drop_token(col, player).map_err(|e| {
            debug!(%player, column, error = %e, "move rejected");
            MoveError::from(e)
        })?;
        debug!(%player, row, col, "token placed");

        let outcome = win::evaluate(&self.board);
        self.turns.record(outcome);
        if outcome.is_terminal() {
            info!(?outcome, moves = self.board.occupied_count(), "game over");
        }

        Ok(())
    }

    /// Player to move next, or `None` once the game is over.
    pub fn next_player(&self) -> Option<Player> {
        self.turns.active_player()
    }

    /// Current outcome, evaluated from the board.
    pub fn winner(&self) -> Outcome {
        win::evaluate(&self.board)
    }

    pub fn is_game_over(&self) -> bool {
        self.turns.is_terminal()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turns.state()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, IndexOutOfRange> {
        self.board.cell_at(row, col)
    }

    /// Columns that accept a move; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Render the board with the default `X`/`O`/`-` symbols.
    pub fn render(&self) -> String {
        self.render_with(&Symbols::default())
    }

    pub fn render_with(&self, symbols: &Symbols) -> String {
        render::render_board(&self.board, symbols)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn play(moves: &[i64]) -> GameEngine {
        let mut game = GameEngine::new();
        for &col in moves {
            game.make_move(col).unwrap();
        }
        game
    }

    #[test]
    fn test_fresh_game() {
        let game = GameEngine::new();
        assert_eq!(game.next_player(), Some(Player::Player1));
        assert_eq!(game.winner(), Outcome::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.legal_columns().len(), 7);
    }

    #[test]
    fn test_move_places_token_and_toggles_player() {
        for col in 0..COLS as i64 {
            let mut game = GameEngine::new();
            game.make_move(col).unwrap();
            assert_eq!(game.board().occupied_count(), 1);
            assert_eq!(game.cell_at(5, col as usize), Ok(Cell::Player1));
            assert_eq!(game.next_player(), Some(Player::Player2));
        }
    }

    #[test]
    fn test_vertical_win() {
        let game = play(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(game.winner(), Outcome::Winner(Player::Player1));
        assert!(game.is_game_over());
        assert_eq!(game.next_player(), None);
    }

    #[test]
    fn test_horizontal_win() {
        let game = play(&[0, 6, 1, 6, 2, 6, 3]);
        assert_eq!(game.winner(), Outcome::Winner(Player::Player1));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_player2_diagonal_win() {
        // Player 2's last token completes a \ diagonal
        let game = play(&[1, 4, 1, 0, 2, 2, 1, 2, 3, 1, 1, 3]);
        assert_eq!(game.winner(), Outcome::Winner(Player::Player2));
        assert_eq!(game.next_player(), None);
    }

    #[test]
    fn test_rejected_out_of_range() {
        let mut game = GameEngine::new();
        assert_eq!(
            game.make_move(-1),
            Err(MoveError::ColumnOutOfRange { column: -1 })
        );
        assert_eq!(
            game.make_move(7),
            Err(MoveError::ColumnOutOfRange { column: 7 })
        );
        assert_eq!(game, GameEngine::new());
        assert_eq!(game.next_player(), Some(Player::Player1));
    }

    #[test]
    fn test_full_column() {
        let mut game = play(&[0, 0, 0, 0, 0, 0]);
        let before = game.clone();
        assert_eq!(game.make_move(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(game, before);
        let tokens = (0..ROWS)
            .filter(|&row| game.cell_at(row, 0) != Ok(Cell::Empty))
            .count();
        assert_eq!(tokens, 6);
        assert_eq!(game.next_player(), Some(Player::Player1));
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut game = play(&[0, 1, 0, 1, 0, 1, 0]);
        let before = game.clone();
        assert_eq!(game.make_move(2), Err(MoveError::GameAlreadyOver));
        assert_eq!(game.make_move(99), Err(MoveError::GameAlreadyOver));
        assert_eq!(game, before);
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_tie_game() {
        let moves = [
            1, 1, 5, 3, 3, 4, 5, 2, 2, 6, 0, 4, 4, 4, 5, 5, 1, 2, 3, 1, 6, 6, 4, 0, 5, 1, 5, 4,
            3, 3, 6, 3, 2, 2, 2, 1, 6, 6, 0, 0, 0, 0,
        ];
        let game = play(&moves);
        assert!(game.board().is_full());
        assert_eq!(game.winner(), Outcome::Tie);
        assert!(game.is_game_over());
        assert_eq!(game.next_player(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let moves = [
            0, 1, 3, 5, 5, 4, 5, 5, 3, 4, 3, 3, 3, 0, 6, 6, 0, 2, 0, 6, 6, 2, 0, 2, 6, 3, 2, 5,
            5, 0, 1, 2, 2, 1, 6, 1, 4, 4, 4, 1, 4,
        ];
        let mut game = play(&moves);
        assert_eq!(game.winner(), Outcome::InProgress);
        assert_eq!(game.next_player(), Some(Player::Player2));

        game.make_move(1).unwrap();
        assert!(game.board().is_full());
        assert_eq!(game.winner(), Outcome::Winner(Player::Player2));
    }

    #[test]
    fn test_render() {
        let game = play(&[3, 3]);
        let text = game.render();
        assert!(text.starts_with("  1   2   3   4   5   6   7 \n"));
        assert!(text.contains("| - | - | - | O | - | - | - |\n"));
        assert!(text.ends_with("| - | - | - | X | - | - | - |\n"));
        assert_eq!(game.to_string(), text);
    }

    #[test]
    fn test_random_games_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let mut game = GameEngine::new();
            while !game.is_game_over() {
                let before = game.clone();
                let column = rng.random_range(-2..9);
                match game.make_move(column) {
                    Ok(()) => {
                        assert_eq!(
                            game.board().occupied_count(),
                            before.board().occupied_count() + 1
                        );
                        if !game.is_game_over() {
                            assert_eq!(
                                game.next_player(),
                                before.next_player().map(Player::other)
                            );
                        }
                    }
                    Err(_) => assert_eq!(game, before),
                }

                // Gravity: no empty cell below an occupied one
                for col in 0..COLS {
                    let mut seen_token = false;
                    for row in 0..ROWS {
                        let cell = game.cell_at(row, col).unwrap();
                        if cell != Cell::Empty {
                            seen_token = true;
                        } else {
                            assert!(!seen_token, "floating token in column {col}");
                        }
                    }
                }
            }
            assert_eq!(game.is_game_over(), game.winner().is_terminal());
        }
    }
}
