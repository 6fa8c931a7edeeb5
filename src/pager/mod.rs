//! The pagination engine
//!
//! A [`Pager`] binds an immutable [`PagerConfig`] and runs the pipeline
//! for each call: validate, locate the cursor, slice the window, derive
//! page info, and hand back a [`Paginated`] value ready to project.
//! Calls are stateless; a `Pager` can be shared read-only across threads.

use crate::error::{Error, Result};
use crate::page_info;
use crate::project::Paginated;
use crate::record::CursorKeyed;
use crate::types::{Direction, PageRequest};
use crate::validate;
use crate::window;
use tracing::debug;


/// Cursor key used when none is configured
pub const DEFAULT_CURSOR_KEY: &str = "id";

/// Page size used when neither the request nor the config supplies one
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Engine configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// Field name used to extract each record's cursor value
    pub cursor_key: String,
    /// Page size applied when a request carries none
    pub default_page_size: i64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            cursor_key: DEFAULT_CURSOR_KEY.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagerConfig {
    /// Create a config with a custom cursor key and default page size
    pub fn new(cursor_key: impl Into<String>, default_page_size: i64) -> Self {
        Self {
            cursor_key: cursor_key.into(),
            default_page_size,
        }
    }
}

/// Cursor-based pagination engine
#[derive(Debug, Clone, Default)]
pub struct Pager {
    config: PagerConfig,
}

impl Pager {
    /// Create an engine with the given config
    pub fn new(config: PagerConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Paginate a dataset of [`CursorKeyed`] records
    ///
    /// Validation and slicing happen eagerly; the returned [`Paginated`]
    /// projects on demand. The dataset must already be in its final order
    /// and must stay stable for the duration of the call.
    pub fn paginate<'a, T>(&self, data: &'a [T], request: &PageRequest) -> Result<Paginated<'a, T>>
    where
        T: CursorKeyed,
    {
        self.paginate_with(data, request, |record: &T| {
            record.cursor_value(&self.config.cursor_key)
        })
    }

    /// Paginate with a caller-supplied cursor accessor
    ///
    /// For record types where the cursor is not a named field, `key_of`
    /// extracts the cursor value directly. The configured cursor key is
    /// still used to name the field in missing-key errors.
    pub fn paginate_with<'a, T, F>(
        &self,
        data: &'a [T],
        request: &PageRequest,
        key_of: F,
    ) -> Result<Paginated<'a, T>>
    where
        F: Fn(&T) -> Option<String>,
    {
        validate::check(data, request, &self.config.cursor_key, &key_of)?;

        let size = request.size.unwrap_or(self.config.default_page_size);
        if size <= 0 {
            // request sizes were validated above; this catches a bad
            // configured default
            return Err(Error::invalid_size(size));
        }
        let size = size as usize;
        let total = data.len();

        debug!(total, size, direction = ?request.direction(), "paginating dataset");

        let window = match request.direction() {
            None => window::from_start(total, size),
            Some(Direction::After) => {
                let cursor = request.after_cursor().unwrap_or_default();
                let pos = self.position_of(data, cursor, &key_of)?;
                window::forward(total, pos, size, cursor)?
            }
            Some(Direction::Before) => {
                let cursor = request.before_cursor().unwrap_or_default();
                let pos = self.position_of(data, cursor, &key_of)?;
                window::backward(pos, size, cursor)?
            }
        };

        let page_info = page_info::compute(data, &window, size, &key_of);

        let slice = &data[window.start..window.end];
        let cursors = slice
            .iter()
            .map(|record| key_of(record).unwrap_or_default())
            .collect();

        Ok(Paginated::new(slice, cursors, page_info))
    }

    fn position_of<T, F>(&self, data: &[T], cursor: &str, key_of: &F) -> Result<usize>
    where
        F: Fn(&T) -> Option<String>,
    {
        window::locate(data, cursor, key_of).ok_or_else(|| Error::cursor_not_found(cursor))
    }
}
