//! Window computation
//!
//! Supports: cursor location, forward/backward/default slicing
//!
//! # Overview
//!
//! A window is a contiguous sub-sequence of the dataset, identified by
//! half-open positions. The slicer picks one of three mutually exclusive
//! strategies depending on which cursor parameter is present: forward from
//! a cursor, backward from a cursor, or default from the dataset's start.

mod slicer;
mod types;

pub use slicer::{backward, forward, from_start, locate};
pub use types::Window;
