//! DTOs for shift report endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewShiftReport, ShiftReport, ShiftReportSummary};

/// Request body for `POST /shiftreport/`.
#[derive(Debug, Deserialize)]
pub struct ShiftReportRequest {
    pub date: String,
    pub client_name: String,
    pub support_provider: String,
    pub participants_welfare: String,
    pub activity: String,
}

impl From<ShiftReportRequest> for NewShiftReport {
    fn from(req: ShiftReportRequest) -> Self {
        NewShiftReport {
            date: req.date,
            client_name: req.client_name,
            support_provider: req.support_provider,
            participants_welfare: req.participants_welfare,
            activity: req.activity,
        }
    }
}

/// A stored shift report.
#[derive(Debug, Serialize)]
pub struct ShiftReportItem {
    pub id: i32,
    pub date: String,
    pub client_name: String,
    pub support_provider: String,
    pub participants_welfare: String,
    pub activity: String,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

impl From<ShiftReport> for ShiftReportItem {
    fn from(r: ShiftReport) -> Self {
        Self {
            id: r.id,
            date: r.date,
            client_name: r.client_name,
            support_provider: r.support_provider,
            participants_welfare: r.participants_welfare,
            activity: r.activity,
            time_created: r.time_created,
            time_updated: r.time_updated,
        }
    }
}

/// Listing row: `client` carries the report's `client_name`.
#[derive(Debug, Serialize)]
pub struct ShiftReportSummaryItem {
    pub id: i32,
    pub date: String,
    pub support_provider: String,
    pub client: String,
}

impl From<ShiftReportSummary> for ShiftReportSummaryItem {
    fn from(s: ShiftReportSummary) -> Self {
        Self {
            id: s.id,
            date: s.date,
            support_provider: s.support_provider,
            client: s.client,
        }
    }
}

/// Response for `GET /shiftreport/all` and `GET /page/shift_reports/`.
#[derive(Debug, Serialize)]
pub struct ShiftReportListResponse {
    pub total: i64,
    pub results: Vec<ShiftReportSummaryItem>,
}
