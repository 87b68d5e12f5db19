//! Payrun entity.

use chrono::{DateTime, Utc};

/// An aggregated payroll record for one employee over a period.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Payrun {
    pub id: i32,
    pub employee: String,
    pub total_hours: f64,
    pub total_km: i32,
    pub total_remittance: f64,
    pub date: String,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Input data for creating a new payrun.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayrun {
    pub employee: String,
    pub total_hours: f64,
    pub total_km: i32,
    pub total_remittance: f64,
    pub date: String,
}
