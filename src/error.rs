//! Error types for cursor-pager
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant is a caller-input error: none are retryable, none are
//! transient, and the engine never logs or falls back on its own.

use crate::types::Direction;
use thiserror::Error;

/// The main error type for cursor-pager
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record does not expose the configured cursor key.
    #[error("all records on data must have a '{key}' attribute")]
    MissingCursorKey { key: String },

    /// Both `after` and `before` were supplied on the same request.
    #[error("use after or before as cursor param, not both")]
    AmbiguousCursorDirection,

    /// The supplied cursor matches no record in the dataset.
    #[error("provided cursor '{cursor}' does not exist on data")]
    CursorNotFound { cursor: String },

    /// The requested page size is zero or negative.
    #[error("size param must be a positive number, got {size}")]
    InvalidPageSize { size: i64 },

    /// The cursor sits at the dataset's outer edge in the requested
    /// direction, so the directional window is empty.
    #[error("there is no data {direction} cursor '{cursor}'")]
    NoDataInDirection { direction: Direction, cursor: String },
}

impl Error {
    /// Create a missing cursor key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingCursorKey { key: key.into() }
    }

    /// Create a cursor not found error
    pub fn cursor_not_found(cursor: impl Into<String>) -> Self {
        Self::CursorNotFound {
            cursor: cursor.into(),
        }
    }

    /// Create an invalid page size error
    pub fn invalid_size(size: i64) -> Self {
        Self::InvalidPageSize { size }
    }

    /// Create a no-data-in-direction error
    pub fn no_data(direction: Direction, cursor: impl Into<String>) -> Self {
        Self::NoDataInDirection {
            direction,
            cursor: cursor.into(),
        }
    }

    /// The direction this error refers to, when it carries one
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::NoDataInDirection { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}

/// Result type alias for cursor-pager
pub type Result<T> = std::result::Result<T, Error>;
