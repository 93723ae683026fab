//! Error types for level loading, settings and the frame driver.

use thiserror::Error;

/// Errors that can occur while reading or parsing a level descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    /// Descriptor could not be found.
    #[error("Level file not found: {0}")]
    NotFound(String),

    /// Descriptor could not be read.
    #[error("Failed to read level '{path}': {details}")]
    Read { path: String, details: String },

    /// A cell is not an unsigned integer tile code.
    #[error("Invalid tile '{token}' at row {row}, column {column}")]
    InvalidTile {
        row: usize,
        column: usize,
        token: String,
    },

    /// Rows have different lengths.
    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Descriptor has no rows.
    #[error("Level descriptor is empty")]
    Empty,
}

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings '{path}': {details}")]
    Read { path: String, details: String },

    #[error("Parse error in settings '{path}': {details}")]
    Parse { path: String, details: String },
}

/// Fatal errors surfaced to the frame driver.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Failed to load level {index} from '{path}'")]
    LevelLoad {
        index: usize,
        path: String,
        #[source]
        source: LevelError,
    },

    #[error("Expected {expected} level paths, got {actual}")]
    LevelCount { expected: usize, actual: usize },

    #[error("Level index {index} out of range ({count} levels)")]
    LevelIndex { index: usize, count: usize },
}
