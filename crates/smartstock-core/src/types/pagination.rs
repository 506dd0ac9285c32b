//! Pagination contract shared by every paged listing.

use serde::{Deserialize, Serialize};

/// Default page size when the query omits `recordsnumber`.
const DEFAULT_RECORDS_NUMBER: u64 = 10;

/// Request parameters for paged and counted queries.
///
/// No upper bound applies to `records_number`: the frontend offers an
/// "all rows" page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of rows per page.
    #[serde(rename = "recordsnumber", default = "default_records_number")]
    pub records_number: u64,
    /// Case-insensitive substring filter on the display name.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Pagination {
    /// Create a pagination request, raising page and size to at least 1.
    pub fn new(page: u64, records_number: u64) -> Self {
        Self {
            page: page.max(1),
            records_number: records_number.max(1),
            filter: None,
        }
    }

    /// Attach a filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Number of rows skipped before the window.
    pub fn offset(&self) -> u64 {
        self.page.max(1).saturating_sub(1).saturating_mul(self.limit())
    }

    /// Window size.
    pub fn limit(&self) -> u64 {
        self.records_number.max(1)
    }

    /// The filter text, or `None` when absent, empty or whitespace-only.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }

    /// Whether `display_name` passes the filter.
    pub fn matches(&self, display_name: &str) -> bool {
        match self.filter() {
            Some(filter) => display_name
                .to_lowercase()
                .contains(&filter.to_lowercase()),
            None => true,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            records_number: DEFAULT_RECORDS_NUMBER,
            filter: None,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_records_number() -> u64 {
    DEFAULT_RECORDS_NUMBER
}
