//! Repository trait for invoices.

use crate::domain::entities::{Invoice, NewInvoice};
use crate::domain::repositories::DateRangeFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for invoices.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInvoiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_invoice.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Inserts an invoice and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError>;

    /// Lists every invoice in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Invoice>, AppError>;

    /// Lists invoices dated within the filter's range, optionally for one
    /// client, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_client(&self, filter: &DateRangeFilter) -> Result<Vec<Invoice>, AppError>;

    /// Lists invoices dated within the filter's range, optionally for one
    /// employee, sorted by date ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_employee(&self, filter: &DateRangeFilter) -> Result<Vec<Invoice>, AppError>;
}
