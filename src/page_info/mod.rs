//! Page-info derivation
//!
//! Derives the window's position metadata relative to the full dataset:
//! existence flags in both directions, boundary cursors, and 1-based
//! page-number bookkeeping.

use crate::window::Window;
use serde::{Deserialize, Serialize};


/// 1-based page position within the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagePosition {
    /// The page the window starts on
    pub current: usize,
    /// Total number of pages at the effective size
    pub of: usize,
}

/// Metadata describing a window's position within the full dataset
///
/// Serializes with the camelCase field names consumers of the flat and
/// node projections expect (`hasNextPage`, `firstCursor`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether records exist after the window
    pub has_next_page: bool,
    /// Whether records exist before the window
    pub has_previous_page: bool,
    /// Total number of records in the dataset
    pub total_count: usize,
    /// Effective page size used for this call
    pub size_per_page: usize,
    /// 1-based absolute position of the window's first record
    pub current_item: usize,
    /// 1-based page numbering at the effective size
    pub page: PagePosition,
    /// Cursor of the window's first record
    pub first_cursor: Option<String>,
    /// Cursor of the window's last record
    pub last_cursor: Option<String>,
}

/// Derive page info for a window over `data`
///
/// `size` is the effective page size after default resolution. An empty
/// window only occurs for an empty dataset (directional empties fail
/// earlier in the slicer) and yields zeroed bookkeeping with no cursors.
pub fn compute<T, F>(data: &[T], window: &Window, size: usize, key_of: &F) -> PageInfo
where
    F: Fn(&T) -> Option<String>,
{
    let total_count = data.len();

    let (Some(first_pos), Some(last_pos)) = (window.first_pos(), window.last_pos()) else {
        return PageInfo {
            size_per_page: size,
            total_count,
            ..PageInfo::default()
        };
    };

    let has_previous_page = first_pos > 0;
    let has_next_page = last_pos < total_count - 1;

    let current_item = first_pos + 1;
    let mut current = current_item.div_ceil(size);
    let of = total_count.div_ceil(size);

    // The final page may be short; pin it so ceil rounding never
    // reports a page past the end.
    if !has_next_page {
        current = of;
    }

    // A backward walk that lands on the first records is page 2, not a
    // fresh page 1.
    if has_previous_page && current == 1 {
        current = 2;
    }

    PageInfo {
        has_next_page,
        has_previous_page,
        total_count,
        size_per_page: size,
        current_item,
        page: PagePosition { current, of },
        first_cursor: key_of(&data[first_pos]),
        last_cursor: key_of(&data[last_pos]),
    }
}
