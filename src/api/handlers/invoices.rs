//! Handlers for invoice endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::invoice::{InvoiceItem, InvoiceRequest};
use crate::api::dto::pagination::DateRangeParams;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an invoice.
///
/// # Endpoint
///
/// `POST /invoice/`
pub async fn create_invoice_handler(
    State(state): State<AppState>,
    Json(payload): Json<InvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceItem>), AppError> {
    let invoice = state.invoice_service.create_invoice(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(invoice.into())))
}

/// Lists every invoice.
///
/// # Endpoint
///
/// `GET /invoice/`
pub async fn list_invoices_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceItem>>, AppError> {
    let invoices = state.invoice_service.list_invoices().await?;
    Ok(Json(invoices.into_iter().map(InvoiceItem::from).collect()))
}

/// Lists invoices in an inclusive date range, optionally for one client.
///
/// # Endpoint
///
/// `GET /invoices?start_date=&end_date=&client=`
///
/// # Errors
///
/// Returns 400 if `start_date` or `end_date` is missing.
pub async fn filter_invoices_by_client_handler(
    State(state): State<AppState>,
    Query(mut params): Query<DateRangeParams>,
) -> Result<Json<Vec<InvoiceItem>>, AppError> {
    params.validate()?;
    let (start_date, end_date) = params.range();

    let invoices = state
        .invoice_service
        .invoices_for_client(start_date, end_date, params.client)
        .await?;

    Ok(Json(invoices.into_iter().map(InvoiceItem::from).collect()))
}

/// Lists invoices in an inclusive date range, optionally for one employee,
/// sorted by date ascending.
///
/// # Endpoint
///
/// `GET /invoices/employee?start_date=&end_date=&employee=`
///
/// # Errors
///
/// Returns 400 if `start_date` or `end_date` is missing.
pub async fn filter_invoices_by_employee_handler(
    State(state): State<AppState>,
    Query(mut params): Query<DateRangeParams>,
) -> Result<Json<Vec<InvoiceItem>>, AppError> {
    params.validate()?;
    let (start_date, end_date) = params.range();

    let invoices = state
        .invoice_service
        .invoices_for_employee(start_date, end_date, params.employee)
        .await?;

    Ok(Json(invoices.into_iter().map(InvoiceItem::from).collect()))
}
