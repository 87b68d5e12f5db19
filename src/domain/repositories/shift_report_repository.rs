//! Repository trait for shift reports.

use crate::domain::entities::{Invoice, NewInvoice, NewShiftReport, ShiftReport, ShiftReportSummary};
use crate::domain::repositories::Page;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shift reports.
///
/// Listing methods order reports newest first (`time_created DESC, id DESC`).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShiftReportRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_shift_report.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShiftReportRepository: Send + Sync {
    /// Inserts a shift report and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_report: NewShiftReport) -> Result<ShiftReport, AppError>;

    /// Finds a shift report by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<ShiftReport>, AppError>;

    /// Lists report summaries, newest first.
    ///
    /// `None` returns every report; `Some(page)` returns that window only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_summaries(&self, page: Option<Page>) -> Result<Vec<ShiftReportSummary>, AppError>;

    /// Counts all shift reports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Inserts a shift report and an invoice linked to it in one transaction.
    ///
    /// The invoice's `shiftreport_id` is set to the new report's id. If
    /// either insert fails, neither row is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_with_invoice(
        &self,
        new_report: NewShiftReport,
        new_invoice: NewInvoice,
    ) -> Result<(ShiftReport, Invoice), AppError>;
}
