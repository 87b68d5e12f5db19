//! Fixed demonstration dataset served by `/api/data/`.
//!
//! The rows are generated once on first access and never change, so they
//! are shared without synchronisation.

use serde::Serialize;
use std::sync::LazyLock;

/// Number of rows in the demo dataset.
pub const DEMO_ROW_COUNT: usize = 100;

/// One demo row, shaped like a shift report summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRow {
    pub id: usize,
    pub client: String,
    pub date: String,
    pub support_provider: String,
}

static DEMO_ROWS: LazyLock<Vec<DemoRow>> = LazyLock::new(|| {
    (1..=DEMO_ROW_COUNT)
        .map(|i| DemoRow {
            id: i,
            client: format!("Client {i}"),
            date: format!("12/{}/23", i % 12 + 1),
            support_provider: format!("Provider {i}"),
        })
        .collect()
});

/// Returns the rows of a 1-indexed page together with the dataset size.
///
/// Pages beyond the data are empty.
pub fn page(page: u32, page_size: u32) -> (&'static [DemoRow], usize) {
    let rows = DEMO_ROWS.as_slice();
    let page_size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);

    let slice = if start >= rows.len() {
        &rows[..0]
    } else {
        let end = start.saturating_add(page_size).min(rows.len());
        &rows[start..end]
    };

    (slice, rows.len())
}
