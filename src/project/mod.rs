//! Result projections
//!
//! Supports: flat "REST" shape, graph-style "node + cursor" shape
//!
//! # Overview
//!
//! A [`Paginated`] value holds the computed window and its page info.
//! Both projections are views over the same computation: calling either
//! any number of times yields identical results, and neither alters the
//! shared [`PageInfo`].

use crate::page_info::PageInfo;
use serde::Serialize;

#[cfg(test)]
mod tests;

/// The outcome of one pagination call, ready to project
///
/// Borrows the window from the caller's dataset; cursor values for the
/// window's records are extracted once, up front, so projections are
/// cheap and deterministic.
#[derive(Debug, Clone)]
pub struct Paginated<'a, T> {
    window: &'a [T],
    cursors: Vec<String>,
    page_info: PageInfo,
}

impl<'a, T> Paginated<'a, T> {
    pub(crate) fn new(window: &'a [T], cursors: Vec<String>, page_info: PageInfo) -> Self {
        debug_assert_eq!(window.len(), cursors.len());
        Self {
            window,
            cursors,
            page_info,
        }
    }

    /// The window's page info
    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Number of records in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if the window holds no records
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Project as a flat ordered list with page info
    pub fn to_flat(&self) -> FlatPage<'a, T> {
        FlatPage {
            data: self.window,
            page_info: self.page_info.clone(),
        }
    }

    /// Project as `{node, cursor}` pairs with page info
    pub fn to_nodes(&self) -> NodePage<'a, T> {
        let data = self
            .window
            .iter()
            .zip(&self.cursors)
            .map(|(node, cursor)| Edge {
                node,
                cursor: cursor.clone(),
            })
            .collect();

        NodePage {
            data,
            page_info: self.page_info.clone(),
        }
    }
}

/// Flat "REST" projection: the window as a plain ordered list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPage<'a, T> {
    /// The window's records, in dataset order
    pub data: &'a [T],
    /// The window's page info
    pub page_info: PageInfo,
}

/// One record wrapped with its own cursor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<'a, T> {
    /// The record itself
    pub node: &'a T,
    /// The record's cursor value
    pub cursor: String,
}

/// Graph-style projection: each record wrapped with its cursor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePage<'a, T> {
    /// The window's records as `{node, cursor}` pairs
    pub data: Vec<Edge<'a, T>>,
    /// The window's page info, identical to the flat projection's
    pub page_info: PageInfo,
}
