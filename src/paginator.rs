//! Standalone functional facade
//!
//! A configuration-free entry point over the same engine: the cursor key
//! is fixed to `"id"` and the default page size to 25. Useful when one
//! call site does not warrant holding a [`Pager`](crate::Pager).

use crate::error::Result;
use crate::pager::Pager;
use crate::project::{Edge, FlatPage};
use crate::record::CursorKeyed;
use crate::types::PageRequest;

/// Paginate a dataset with the default cursor key and page size
///
/// Equivalent to `Pager::default().paginate(data, request)` projected as
/// the flat shape.
pub fn paginate<'a, T>(data: &'a [T], request: &PageRequest) -> Result<FlatPage<'a, T>>
where
    T: CursorKeyed,
{
    Pager::default().paginate(data, request).map(|p| p.to_flat())
}

/// Wrap one record with its `"id"` cursor
///
/// A record without an `"id"` value yields an empty cursor.
pub fn to_node<T: CursorKeyed>(record: &T) -> Edge<'_, T> {
    Edge {
        cursor: record.cursor_value("id").unwrap_or_default(),
        node: record,
    }
}

/// Wrap every record in a slice with its `"id"` cursor
pub fn to_nodes<T: CursorKeyed>(data: &[T]) -> Vec<Edge<'_, T>> {
    data.iter().map(to_node).collect()
}
