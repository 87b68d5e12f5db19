//! Handler for the demo dataset endpoint.

use axum::{Json, extract::Query};
use validator::Validate;

use crate::api::dto::demo::DemoDataResponse;
use crate::api::dto::pagination::DemoPageParams;
use crate::application::demo_data;
use crate::error::AppError;

/// Pages through the fixed demo dataset.
///
/// # Endpoint
///
/// `GET /api/data/?page=&page_size=`
///
/// # Errors
///
/// Returns 400 if `page` is 0 or `page_size` is outside 1..=100.
pub async fn demo_data_handler(
    Query(params): Query<DemoPageParams>,
) -> Result<Json<DemoDataResponse>, AppError> {
    params.validate()?;

    let (rows, total_rows) = demo_data::page(params.page(), params.page_size());

    Ok(Json(DemoDataResponse { rows, total_rows }))
}
