use std::path::PathBuf;

use crate::game::ColumnIndex;

/// Errors raised by the game engine when a caller breaks its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is full")]
    ColumnFull { column: ColumnIndex },

    #[error("game is already started")]
    AlreadyStarted,

    #[error("game is not started yet")]
    NotStarted,

    #[error("game is terminated")]
    Terminated,
}

/// Errors raised while building a grid from a textual row layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error(
        "expected 9 '|'-separated tokens (7 cells and 2 borders), found {found}: \
         write rows like \"   | R |   |   |   |   |   | Y |   \""
    )]
    WrongCellCount { found: usize },

    #[error("invalid cell {token:?}, expected \"R\", \"Y\" or blank")]
    InvalidCell { token: String },

    #[error("layout has {rows} rows, a grid holds at most 6")]
    TooManyRows { rows: usize },

    #[error("layout does not fit the grid: {0}")]
    Grid(#[from] GameError),
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
