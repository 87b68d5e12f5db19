//! Handlers for shift report endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::ShiftReportPageParams;
use crate::api::dto::shift_report::{
    ShiftReportItem, ShiftReportListResponse, ShiftReportRequest, ShiftReportSummaryItem,
};
use crate::domain::entities::ShiftReportSummary;
use crate::error::AppError;
use crate::state::AppState;

fn to_list_response(summaries: Vec<ShiftReportSummary>, total: i64) -> ShiftReportListResponse {
    ShiftReportListResponse {
        total,
        results: summaries
            .into_iter()
            .map(ShiftReportSummaryItem::from)
            .collect(),
    }
}

/// Creates a shift report.
///
/// # Endpoint
///
/// `POST /shiftreport/`
pub async fn create_shift_report_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShiftReportRequest>,
) -> Result<(StatusCode, Json<ShiftReportItem>), AppError> {
    let report = state
        .shift_report_service
        .create_report(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(report.into())))
}

/// Fetches one shift report.
///
/// # Endpoint
///
/// `GET /shiftreport/{id}`
///
/// # Errors
///
/// Returns 404 if no report has this id.
pub async fn get_shift_report_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ShiftReportItem>, AppError> {
    let report = state.shift_report_service.get_report(id).await?;
    Ok(Json(report.into()))
}

/// Lists every shift report summary, newest first.
///
/// # Endpoint
///
/// `GET /shiftreport/all`
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "results": [
///     { "id": 2, "date": "2023-12-02", "support_provider": "Sam", "client": "Jane Roe" },
///     { "id": 1, "date": "2023-12-01", "support_provider": "Sam", "client": "Jane Roe" }
///   ]
/// }
/// ```
pub async fn list_shift_reports_handler(
    State(state): State<AppState>,
) -> Result<Json<ShiftReportListResponse>, AppError> {
    let (summaries, total) = state.shift_report_service.list_all().await?;
    Ok(Json(to_list_response(summaries, total)))
}

/// Lists one page of shift report summaries, newest first.
///
/// # Endpoint
///
/// `GET /page/shift_reports/`
///
/// # Query Parameters
///
/// - `page` (optional): Page number, at least 1 (default: 1)
/// - `page_size` (optional): Items per page, at least 1 (default: 30)
///
/// `total` is always the full row count; a page past the end has empty
/// `results`.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn page_shift_reports_handler(
    State(state): State<AppState>,
    Query(params): Query<ShiftReportPageParams>,
) -> Result<Json<ShiftReportListResponse>, AppError> {
    params.validate()?;

    let (summaries, total) = state
        .shift_report_service
        .list_page(params.page(), params.page_size())
        .await?;

    Ok(Json(to_list_response(summaries, total)))
}
