//! Shift report service, including the combined report + invoice creation.

use std::sync::Arc;

use crate::domain::entities::{Invoice, NewInvoice, NewShiftReport, ShiftReport, ShiftReportSummary};
use crate::domain::repositories::{Page, ShiftReportRepository};
use crate::error::AppError;
use serde_json::json;

/// Default number of summaries per page for paginated listings.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Service for shift report storage and listing.
pub struct ShiftReportService<R: ShiftReportRepository> {
    repository: Arc<R>,
}

impl<R: ShiftReportRepository> ShiftReportService<R> {
    /// Creates a new shift report service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new shift report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_report(&self, new_report: NewShiftReport) -> Result<ShiftReport, AppError> {
        let report = self.repository.create(new_report).await?;
        tracing::debug!(shiftreport_id = report.id, "Shift report created");
        Ok(report)
    }

    /// Retrieves one shift report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no report has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_report(&self, id: i32) -> Result<ShiftReport, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Shift report not found", json!({ "id": id })))
    }

    /// Lists every report summary, newest first, with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<(Vec<ShiftReportSummary>, i64), AppError> {
        tokio::try_join!(self.repository.list_summaries(None), self.repository.count())
    }

    /// Lists one page of report summaries, newest first, with the total count.
    ///
    /// A page past the end yields an empty slice and the unchanged total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<ShiftReportSummary>, i64), AppError> {
        let window = Page::new(page, page_size);
        tokio::try_join!(
            self.repository.list_summaries(Some(window)),
            self.repository.count()
        )
    }

    /// Stores a shift report together with an invoice linked to it.
    ///
    /// Both rows are written in one transaction. The invoice's
    /// `shiftreport_id` always points at the new report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; in that case
    /// neither row is stored.
    pub async fn create_with_invoice(
        &self,
        new_report: NewShiftReport,
        new_invoice: NewInvoice,
    ) -> Result<(ShiftReport, Invoice), AppError> {
        let (report, invoice) = self
            .repository
            .create_with_invoice(new_report, new_invoice)
            .await?;

        tracing::info!(
            shiftreport_id = report.id,
            invoice_id = invoice.id,
            "Shift report and invoice created"
        );

        Ok((report, invoice))
    }
}
