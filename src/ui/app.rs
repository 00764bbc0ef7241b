use crate::error::MoveError;
use crate::game::{GameEngine, Outcome, Symbols, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    game: GameEngine,
    symbols: Symbols,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(symbols: Symbols) -> Self {
        App {
            game: GameEngine::new(),
            symbols,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token(self.selected_column as i64);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_token(column as i64);
            }
            KeyCode::Char('r') => {
                self.game = GameEngine::new();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current player's token in `column`
    fn drop_token(&mut self, column: i64) {
        match self.game.make_move(column) {
            Ok(()) => {
                self.message = match self.game.winner() {
                    Outcome::Winner(player) => Some(format!("{player} wins!")),
                    Outcome::Tie => Some("It's a tie!".to_string()),
                    Outcome::InProgress => None,
                };
            }
            Err(err) => {
                debug!(column, error = %err, "move rejected");
                self.message = Some(match err {
                    MoveError::ColumnFull { .. } => "Column is full!".to_string(),
                    MoveError::ColumnOutOfRange { .. } => "Invalid column!".to_string(),
                    MoveError::GameAlreadyOver => {
                        "Game over! Press 'r' to restart.".to_string()
                    }
                });
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.symbols,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Symbols::default())
    }
}
