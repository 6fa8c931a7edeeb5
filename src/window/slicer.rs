//! Slicing strategies
//!
//! Each strategy computes a window of positions; none of them touch the
//! records themselves. Clipping always truncates the window when fewer
//! than `size` records remain in the requested direction. The hard
//! failure is reserved for a cursor sitting exactly at the dataset's
//! outer edge, where the directional window would be empty: paging past
//! the known last cursor is a caller error, not an empty page.

use super::types::Window;
use crate::error::{Error, Result};
use crate::types::Direction;

/// Find the position of the record whose cursor value equals `cursor`
///
/// Linear scan, first match. `None` is distinct from position 0. Cursor
/// uniqueness is a caller precondition; with duplicates the first match
/// wins, which callers must not rely on.
pub fn locate<T, F>(data: &[T], cursor: &str, key_of: &F) -> Option<usize>
where
    F: Fn(&T) -> Option<String>,
{
    data.iter()
        .position(|record| key_of(record).as_deref() == Some(cursor))
}

/// Default mode: the first `size` records
pub fn from_start(total: usize, size: usize) -> Window {
    Window::new(0, size.min(total))
}

/// Forward mode: the `size` records immediately following position `pos`
///
/// The cursor record itself is excluded. Fails when `pos` is the last
/// position, since nothing follows the cursor.
pub fn forward(total: usize, pos: usize, size: usize, cursor: &str) -> Result<Window> {
    let start = pos + 1;
    let end = start.saturating_add(size).min(total);

    if start >= end {
        return Err(Error::no_data(Direction::After, cursor));
    }

    Ok(Window::new(start, end))
}

/// Backward mode: the `size` records immediately preceding position `pos`
///
/// The cursor record itself is excluded. Fails when `pos` is 0, since
/// nothing precedes the cursor.
pub fn backward(pos: usize, size: usize, cursor: &str) -> Result<Window> {
    if pos == 0 {
        return Err(Error::no_data(Direction::Before, cursor));
    }

    Ok(Window::new(pos.saturating_sub(size), pos))
}
