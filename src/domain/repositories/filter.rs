//! Query value types shared by the listing repositories.

/// Inclusive date window with an optional exact-match name filter.
///
/// Dates are free text and compared in byte order, so callers must use a
/// consistently sortable format such as `YYYY-MM-DD`. Nothing here checks
/// that they do.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeFilter {
    pub start_date: String,
    pub end_date: String,
    pub name: Option<String>,
}

impl DateRangeFilter {
    /// Creates a filter covering `start_date..=end_date` with no name filter.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            name: None,
        }
    }

    /// Restricts results to rows whose name column equals `name`.
    ///
    /// An empty string is treated the same as no filter.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|n| !n.is_empty());
        self
    }
}

/// Offset/limit window for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    /// Builds the window for a 1-indexed page number.
    ///
    /// `page` must be at least 1; request validation guarantees this.
    pub fn new(page: u32, page_size: u32) -> Self {
        let page_size = i64::from(page_size);
        Self {
            offset: (i64::from(page).max(1) - 1).saturating_mul(page_size),
            limit: page_size,
        }
    }
}
