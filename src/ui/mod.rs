//! Terminal UI for playing Connect Four with the keyboard.

mod app;
mod game_view;

pub use app::App;
