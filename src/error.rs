//! Error types for richtext.

use std::fmt;

/// Result type alias for richtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richtext operations.
///
/// The styling path itself has no error states: a query substring that does
/// not occur in the text is a documented no-op, not a failure. Errors only
/// arise when parsing attribute values.
#[derive(Debug)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
        }
    }
}

impl std::error::Error for Error {}
