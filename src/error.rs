use std::path::PathBuf;

/// Errors from dropping a token onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {column} is out of range")]
    ColumnOutOfRange { column: i64 },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// A read outside the 6x7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {col}) is outside the board")]
pub struct IndexOutOfRange {
    pub row: usize,
    pub col: usize,
}

/// Errors returned by [`GameEngine::make_move`](crate::game::GameEngine::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    ColumnOutOfRange { column: i64 },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::ColumnOutOfRange { column } => MoveError::ColumnOutOfRange { column },
            PlacementError::ColumnFull { column } => MoveError::ColumnFull { column },
        }
    }
}

/// Errors from reading moves off a text source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read move: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("no more moves in input")]
    Exhausted,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
