//! Handler for the combined shift report + invoice endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shift_invoice::{ShiftInvoiceRequest, ShiftInvoiceResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shift report and an invoice linked to it, atomically.
///
/// # Endpoint
///
/// `POST /api/shift_invoice`
///
/// # Request Body
///
/// ```json
/// {
///   "shiftreport": { "date": "2023-12-01", "client_name": "Jane Roe", ... },
///   "invoice": { "client": "Jane Roe", "employee": "Sam", ... }
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if either insert fails; neither row is stored in that case.
pub async fn create_shift_invoice_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShiftInvoiceRequest>,
) -> Result<(StatusCode, Json<ShiftInvoiceResponse>), AppError> {
    let (report, invoice) = state
        .shift_report_service
        .create_with_invoice(payload.shiftreport.into(), payload.invoice.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShiftInvoiceResponse {
            message: "Data created successfully",
            shiftreport: report.into(),
            invoice: invoice.into(),
        }),
    ))
}
