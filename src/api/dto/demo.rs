//! DTOs for the demo dataset endpoint.

use serde::Serialize;

use crate::application::demo_data::DemoRow;

/// Response for `GET /api/data/`.
#[derive(Debug, Serialize)]
pub struct DemoDataResponse {
    pub rows: &'static [DemoRow],
    #[serde(rename = "totalRows")]
    pub total_rows: usize,
}
