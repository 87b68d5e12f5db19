//! Shift report entity and its listing projection.

use chrono::{DateTime, Utc};

/// A record of a single care-support session.
///
/// `date` is free text and `client_name` is not a reference to
/// [`super::Client`]; both are stored exactly as submitted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShiftReport {
    pub id: i32,
    pub client_name: String,
    pub date: String,
    pub support_provider: String,
    pub participants_welfare: String,
    pub activity: String,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Input data for creating a new shift report.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShiftReport {
    pub date: String,
    pub client_name: String,
    pub support_provider: String,
    pub participants_welfare: String,
    pub activity: String,
}

/// Condensed shift report row used by the listing endpoints.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShiftReportSummary {
    pub id: i32,
    pub date: String,
    pub support_provider: String,
    pub client: String,
}
