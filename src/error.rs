//! Error types for color resolution and scene operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported by the command-line front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input file not found (-1)
    FileNotFound = -1,
    /// Malformed input document (-3)
    ParseError = -3,
    /// Color input could not be normalized or resolved (E100)
    InvalidColor = 100,
    /// Catalog name is not in the allowed set or not loaded (E200)
    UnknownCatalog = 200,
    /// Template key not found (E201)
    UnknownTemplate = 201,
    /// Template carries an invalid color (E202)
    InvalidTemplate = 202,
}

/// Main error type for the palette core.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid color input: '{input}'")]
    InvalidColor { input: String },

    #[error("Unknown catalog: '{name}'")]
    UnknownCatalog { name: String },

    #[error("Unknown template: '{key}'")]
    UnknownTemplate { key: String },

    #[error("Template '{key}' has an invalid {field} color: '{value}'")]
    InvalidTemplate {
        key: String,
        field: String,
        value: String,
    },

    #[error("Invalid command at line {line}: {message}")]
    InvalidCommand { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaletteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaletteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PaletteError::InvalidColor { .. } => ErrorCode::InvalidColor,
            PaletteError::UnknownCatalog { .. } => ErrorCode::UnknownCatalog,
            PaletteError::UnknownTemplate { .. } => ErrorCode::UnknownTemplate,
            PaletteError::InvalidTemplate { .. } => ErrorCode::InvalidTemplate,
            PaletteError::InvalidCommand { .. } => ErrorCode::ParseError,
            PaletteError::Json(_) => ErrorCode::ParseError,
            PaletteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    pub(crate) fn invalid_color(input: &str) -> Self {
        PaletteError::InvalidColor {
            input: input.to_string(),
        }
    }
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
