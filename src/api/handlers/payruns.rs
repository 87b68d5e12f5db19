//! Handlers for payrun endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::DateRangeParams;
use crate::api::dto::payrun::{PayrunBatchRequest, PayrunBatchResponse, PayrunItem, PayrunRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a payrun.
///
/// # Endpoint
///
/// `POST /payrun/`
pub async fn create_payrun_handler(
    State(state): State<AppState>,
    Json(payload): Json<PayrunRequest>,
) -> Result<(StatusCode, Json<PayrunItem>), AppError> {
    let payrun = state.payrun_service.create_payrun(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(payrun.into())))
}

/// Stores a batch of payruns in one transaction.
///
/// # Endpoint
///
/// `POST /store_payrun_data`
///
/// # Request Body
///
/// ```json
/// {
///   "records": [
///     { "employee": "Sam", "total_hours": 38.0, "total_km": 120,
///       "total_remittance": 1900.0, "date": "2023-12-15" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if any record fails to store; no record from the batch is
/// kept in that case.
pub async fn store_payrun_data_handler(
    State(state): State<AppState>,
    Json(payload): Json<PayrunBatchRequest>,
) -> Result<(StatusCode, Json<PayrunBatchResponse>), AppError> {
    let stored = state
        .payrun_service
        .store_batch(payload.into_new_payruns())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PayrunBatchResponse {
            message: "Payrun data stored successfully",
            count: stored.len(),
        }),
    ))
}

/// Lists every payrun.
///
/// # Endpoint
///
/// `GET /payrun/`
pub async fn list_payruns_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PayrunItem>>, AppError> {
    let payruns = state.payrun_service.list_payruns().await?;
    Ok(Json(payruns.into_iter().map(PayrunItem::from).collect()))
}

/// Lists payruns in an inclusive date range, optionally for one employee.
///
/// # Endpoint
///
/// `GET /payruns?start_date=&end_date=&employee=`
///
/// # Errors
///
/// Returns 400 if `start_date` or `end_date` is missing.
pub async fn filter_payruns_handler(
    State(state): State<AppState>,
    Query(mut params): Query<DateRangeParams>,
) -> Result<Json<Vec<PayrunItem>>, AppError> {
    params.validate()?;
    let (start_date, end_date) = params.range();

    let payruns = state
        .payrun_service
        .payruns_for_employee(start_date, end_date, params.employee)
        .await?;

    Ok(Json(payruns.into_iter().map(PayrunItem::from).collect()))
}
