//! Repository trait for payruns.

use crate::domain::entities::{NewPayrun, Payrun};
use crate::domain::repositories::DateRangeFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for payruns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPayrunRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayrunRepository: Send + Sync {
    /// Inserts a payrun and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_payrun: NewPayrun) -> Result<Payrun, AppError>;

    /// Inserts a batch of payruns in one transaction.
    ///
    /// Either every record is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_many(&self, new_payruns: Vec<NewPayrun>) -> Result<Vec<Payrun>, AppError>;

    /// Lists every payrun in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Payrun>, AppError>;

    /// Lists payruns dated within the filter's range, optionally for one
    /// employee, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_employee(&self, filter: &DateRangeFilter) -> Result<Vec<Payrun>, AppError>;
}
