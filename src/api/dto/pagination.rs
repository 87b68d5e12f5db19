//! Pagination and filtering query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::shift_report_service::DEFAULT_PAGE_SIZE;

/// Default page size for the demo dataset.
pub const DEMO_DEFAULT_PAGE_SIZE: u32 = 15;

/// Query parameters for `GET /page/shift_reports/`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
///
/// # Defaults
///
/// - `page`: 1
/// - `page_size`: 30
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShiftReportPageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page size must be greater than 0"))]
    pub page_size: Option<u32>,
}

impl ShiftReportPageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Query parameters for `GET /api/data/`.
///
/// # Defaults
///
/// - `page`: 1
/// - `page_size`: 15, at most 100
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct DemoPageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: Option<u32>,
}

impl DemoPageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEMO_DEFAULT_PAGE_SIZE)
    }
}

/// Inclusive date range with optional name filters.
///
/// Used by `/invoices` (`client`), `/invoices/employee` and `/payruns`
/// (`employee`). Dates are opaque strings compared in byte order; use
/// `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Validate)]
pub struct DateRangeParams {
    #[validate(required(message = "start_date is required"))]
    pub start_date: Option<String>,

    #[validate(required(message = "end_date is required"))]
    pub end_date: Option<String>,

    pub client: Option<String>,

    pub employee: Option<String>,
}

impl DateRangeParams {
    /// Splits validated parameters into `(start_date, end_date)`.
    ///
    /// Call only after [`Validate::validate`] succeeded.
    pub fn range(&mut self) -> (String, String) {
        (
            self.start_date.take().unwrap_or_default(),
            self.end_date.take().unwrap_or_default(),
        )
    }
}
