//! Invoice service.

use std::sync::Arc;

use crate::domain::entities::{Invoice, NewInvoice};
use crate::domain::repositories::{DateRangeFilter, InvoiceRepository};
use crate::error::AppError;

/// Service for invoice storage and date-range queries.
pub struct InvoiceService<R: InvoiceRepository> {
    repository: Arc<R>,
}

impl<R: InvoiceRepository> InvoiceService<R> {
    /// Creates a new invoice service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new invoice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError> {
        let invoice = self.repository.create(new_invoice).await?;
        tracing::debug!(invoice_id = invoice.id, "Invoice created");
        Ok(invoice)
    }

    /// Lists every invoice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        self.repository.list().await
    }

    /// Invoices dated `start_date..=end_date`, optionally for one client.
    ///
    /// An empty `client` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn invoices_for_client(
        &self,
        start_date: String,
        end_date: String,
        client: Option<String>,
    ) -> Result<Vec<Invoice>, AppError> {
        let filter = DateRangeFilter::new(start_date, end_date).with_name(client);
        self.repository.find_by_client(&filter).await
    }

    /// Invoices dated `start_date..=end_date`, optionally for one employee,
    /// sorted by date ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn invoices_for_employee(
        &self,
        start_date: String,
        end_date: String,
        employee: Option<String>,
    ) -> Result<Vec<Invoice>, AppError> {
        let filter = DateRangeFilter::new(start_date, end_date).with_name(employee);
        self.repository.find_by_employee(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockInvoiceRepository;

    #[tokio::test]
    async fn test_empty_client_filter_is_dropped() {
        let mut mock_repo = MockInvoiceRepository::new();

        mock_repo
            .expect_find_by_client()
            .withf(|f| f.name.is_none() && f.start_date == "2023-12-01" && f.end_date == "2023-12-31")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = InvoiceService::new(Arc::new(mock_repo));

        let result = service
            .invoices_for_client(
                "2023-12-01".to_string(),
                "2023-12-31".to_string(),
                Some(String::new()),
            )
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_employee_filter_is_forwarded() {
        let mut mock_repo = MockInvoiceRepository::new();

        mock_repo
            .expect_find_by_employee()
            .withf(|f| f.name.as_deref() == Some("Sam"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = InvoiceService::new(Arc::new(mock_repo));

        let result = service
            .invoices_for_employee(
                "2023-12-01".to_string(),
                "2023-12-31".to_string(),
                Some("Sam".to_string()),
            )
            .await;

        assert!(result.is_ok());
    }
}
