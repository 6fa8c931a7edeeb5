//! Common types used throughout cursor-pager
//!
//! This module contains the paging request, the pagination direction,
//! and shared type aliases used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Direction
// ============================================================================

/// Pagination direction requested via `after`/`before`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward pagination, records following the cursor
    After,
    /// Backward pagination, records preceding the cursor
    Before,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::After => write!(f, "after"),
            Self::Before => write!(f, "before"),
        }
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// Paging parameters for one pagination call
///
/// `after` and `before` are mutually exclusive; `size` falls back to the
/// engine's configured default when absent. An empty-string cursor is
/// treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRequest {
    /// Cursor value to page forward from
    pub after: Option<String>,
    /// Cursor value to page backward from
    pub before: Option<String>,
    /// Requested page size; must be positive when present
    pub size: Option<i64>,
}

impl PageRequest {
    /// Create an empty request (default mode, default size)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forward request paging after the given cursor
    pub fn forward(after: impl Into<String>) -> Self {
        Self {
            after: Some(after.into()),
            ..Self::default()
        }
    }

    /// Create a backward request paging before the given cursor
    pub fn backward(before: impl Into<String>) -> Self {
        Self {
            before: Some(before.into()),
            ..Self::default()
        }
    }

    /// Create a default-mode request with an explicit size
    pub fn sized(size: i64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Set the requested size
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// The effective `after` cursor, with empty strings normalized away
    pub fn after_cursor(&self) -> Option<&str> {
        non_empty(&self.after)
    }

    /// The effective `before` cursor, with empty strings normalized away
    pub fn before_cursor(&self) -> Option<&str> {
        non_empty(&self.before)
    }

    /// The single supplied cursor, if any (`after` wins when both are set,
    /// matching validation order: ambiguity is rejected before lookup)
    pub fn cursor(&self) -> Option<&str> {
        self.after_cursor().or_else(|| self.before_cursor())
    }

    /// The requested direction, if a cursor was supplied
    pub fn direction(&self) -> Option<Direction> {
        if self.after_cursor().is_some() {
            Some(Direction::After)
        } else if self.before_cursor().is_some() {
            Some(Direction::Before)
        } else {
            None
        }
    }

    /// Check whether both cursors were supplied
    pub fn is_ambiguous(&self) -> bool {
        self.after_cursor().is_some() && self.before_cursor().is_some()
    }
}

fn non_empty(cursor: &Option<String>) -> Option<&str> {
    cursor.as_deref().filter(|c| !c.is_empty())
}
