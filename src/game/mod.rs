//! Core Connect Four game logic: board, players, win detection, turn order,
//! and the [`GameEngine`] facade that ties them together.

mod board;
mod engine;
mod player;
mod render;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::GameEngine;
pub use player::Player;
pub use render::{instructions, render_board, Symbols};
pub use state::{Phase, TurnController, TurnState};
pub use win::{evaluate, Direction, Outcome};
