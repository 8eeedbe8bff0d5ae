// src/error.rs

//! Typed errors for the codec, palette and location layers.
//!
//! Orchestration code (editor, shells) wraps these in `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern must be {expected} characters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("Invalid character {found:?} at position {position}, expected a digit 0-8")]
    InvalidCharacter { position: usize, found: char },
    #[error("Color index {0} is outside the palette")]
    IndexOutOfRange(u8),
    #[error("Color {color} at position {position} is not in the palette")]
    IndexNotFound { position: usize, color: String },
    #[error("Color {0} is not in the palette")]
    UnknownColor(String),
    #[error("Cell position {position} is outside the grid ({cells} cells)")]
    CellOutOfRange { position: usize, cells: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Failed to parse page URL {href:?}: {source}")]
    Parse {
        href: String,
        #[source]
        source: url::ParseError,
    },
}
