//! Payrun service.

use std::sync::Arc;

use crate::domain::entities::{NewPayrun, Payrun};
use crate::domain::repositories::{DateRangeFilter, PayrunRepository};
use crate::error::AppError;

/// Service for payrun storage, bulk import and date-range queries.
pub struct PayrunService<R: PayrunRepository> {
    repository: Arc<R>,
}

impl<R: PayrunRepository> PayrunService<R> {
    /// Creates a new payrun service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new payrun.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_payrun(&self, new_payrun: NewPayrun) -> Result<Payrun, AppError> {
        let payrun = self.repository.create(new_payrun).await?;
        tracing::debug!(payrun_id = payrun.id, "Payrun created");
        Ok(payrun)
    }

    /// Stores a batch of payruns atomically.
    ///
    /// An empty batch is a no-op and never touches the database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; in that case no
    /// record from the batch is stored.
    pub async fn store_batch(&self, records: Vec<NewPayrun>) -> Result<Vec<Payrun>, AppError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let stored = self.repository.create_many(records).await?;
        tracing::info!(count = stored.len(), "Payrun batch stored");
        Ok(stored)
    }

    /// Lists every payrun.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_payruns(&self) -> Result<Vec<Payrun>, AppError> {
        self.repository.list().await
    }

    /// Payruns dated `start_date..=end_date`, optionally for one employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn payruns_for_employee(
        &self,
        start_date: String,
        end_date: String,
        employee: Option<String>,
    ) -> Result<Vec<Payrun>, AppError> {
        let filter = DateRangeFilter::new(start_date, end_date).with_name(employee);
        self.repository.find_by_employee(&filter).await
    }
}
