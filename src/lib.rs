//! # Connect Four
//!
//! A two-player Connect Four engine: tokens drop to the lowest free cell of a
//! column, and the game ends on four in a row or a full board. Ships with a
//! plain text game loop and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, engine facade
//! - [`input`] — Line-based move input
//! - [`ui`] — Terminal UI for interactive play
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
