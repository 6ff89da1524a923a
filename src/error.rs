use std::fmt;

/// Result type for walkplot operations
pub type Result<T> = std::result::Result<T, WalkplotError>;

/// Main error type for the walkplot library
#[derive(Debug, Clone)]
pub enum WalkplotError {
    /// Required column is absent from the log header
    MissingColumn {
        column: String,
        path: String,
    },

    /// Cell that could not be parsed as a number
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// CSV reading/parsing errors
    CsvError(String),

    /// Errors raised by the drawing backend
    RenderError(String),
}

impl fmt::Display for WalkplotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkplotError::MissingColumn { column, path } => {
                write!(f, "Missing column '{}' in {}", column, path)
            }
            WalkplotError::InvalidCell { row, column, value } => {
                write!(f, "Invalid numeric value '{}' at row {}, column {}", value, row, column)
            }
            WalkplotError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            WalkplotError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            WalkplotError::IoError(msg) => write!(f, "IO error: {}", msg),
            WalkplotError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            WalkplotError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for WalkplotError {}

// Conversion from std::io::Error
impl From<std::io::Error> for WalkplotError {
    fn from(err: std::io::Error) -> Self {
        WalkplotError::IoError(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for WalkplotError {
    fn from(err: csv::Error) -> Self {
        WalkplotError::CsvError(err.to_string())
    }
}

// Helper functions for common error patterns
impl WalkplotError {
    pub fn missing_column<S: Into<String>>(column: S, path: S) -> Self {
        WalkplotError::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        WalkplotError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wraps any drawing-backend error; plotters error types are generic
    /// over the backend so they are carried as a message.
    pub fn render<E: fmt::Display>(err: E) -> Self {
        WalkplotError::RenderError(err.to_string())
    }
}
