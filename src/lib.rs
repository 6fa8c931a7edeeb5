//! # cursor-pager
//!
//! A cursor-based pagination engine for in-memory record collections.
//! Given an already-materialized, ordered dataset and a paging request
//! (an `after` or `before` cursor plus a page size), it computes a
//! contiguous window of that dataset and the metadata describing the
//! window's position.
//!
//! ## Features
//!
//! - **Cursor windows**: forward from a cursor, backward from a cursor,
//!   or from the dataset's start
//! - **Page info**: next/previous existence flags, boundary cursors, and
//!   1-based `current page / total pages` bookkeeping
//! - **Two projections**: a flat "REST" list and a graph-style
//!   `{node, cursor}` list sharing the same page info
//! - **Any record type**: a `CursorKeyed` impl (provided for
//!   `serde_json::Value`) or a plain closure accessor
//!
//! ## Quick Start
//!
//! ```rust
//! use cursor_pager::{PageRequest, Pager, Result};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let data: Vec<_> = (1..=41)
//!         .map(|i| json!({"id": i.to_string()}))
//!         .collect();
//!
//!     let pager = Pager::default();
//!     let result = pager.paginate(&data, &PageRequest::forward("15").with_size(7))?;
//!
//!     let page = result.to_flat();
//!     assert_eq!(page.data.len(), 7);
//!     assert!(page.page_info.has_next_page);
//!
//!     let nodes = result.to_nodes();
//!     assert_eq!(nodes.data[0].cursor, "16");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Pager / paginate()                    │
//! │  paginate(data, request) → Paginated → toFlat() / toNodes() │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────┬───────┴───────┬───────────┬──────────┐
//! │ Validate │  Locate  │     Slice     │ Page Info │ Project  │
//! ├──────────┼──────────┼───────────────┼───────────┼──────────┤
//! │ keys     │ linear   │ forward       │ has next  │ flat     │
//! │ cursors  │ scan     │ backward      │ has prev  │ nodes    │
//! │ size     │          │ from start    │ page x/y  │          │
//! └──────────┴──────────┴───────────────┴───────────┴──────────┘
//! ```
//!
//! Every call is a pure, synchronous function of its inputs plus the
//! engine's immutable configuration. The engine never sorts, never
//! mutates the dataset, and performs no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the engine
pub mod error;

/// Common types: requests, directions, aliases
pub mod types;

/// Record cursor-key access
pub mod record;

/// Paging request validation
pub mod validate;

/// Window computation: locate and slice
pub mod window;

/// Page-info derivation
pub mod page_info;

/// Result projections
pub mod project;

/// The configured pagination engine
pub mod pager;

/// Standalone functional facade
pub mod paginator;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use page_info::{PageInfo, PagePosition};
pub use pager::{Pager, PagerConfig, DEFAULT_CURSOR_KEY, DEFAULT_PAGE_SIZE};
pub use paginator::{paginate, to_node, to_nodes};
pub use project::{Edge, FlatPage, NodePage, Paginated};
pub use record::CursorKeyed;
pub use types::{Direction, JsonObject, JsonValue, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
