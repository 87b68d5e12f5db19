//! DTOs for payrun endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPayrun, Payrun};

/// Request body for `POST /payrun/`, and one entry of a bulk import.
#[derive(Debug, Deserialize)]
pub struct PayrunRequest {
    pub employee: String,
    pub total_hours: f64,
    pub total_km: i32,
    pub total_remittance: f64,
    pub date: String,
}

impl From<PayrunRequest> for NewPayrun {
    fn from(req: PayrunRequest) -> Self {
        NewPayrun {
            employee: req.employee,
            total_hours: req.total_hours,
            total_km: req.total_km,
            total_remittance: req.total_remittance,
            date: req.date,
        }
    }
}

/// Request body for `POST /store_payrun_data`.
#[derive(Debug, Deserialize)]
pub struct PayrunBatchRequest {
    pub records: Vec<PayrunRequest>,
}

impl PayrunBatchRequest {
    pub fn into_new_payruns(self) -> Vec<NewPayrun> {
        self.records.into_iter().map(NewPayrun::from).collect()
    }
}

/// Response for `POST /store_payrun_data`.
#[derive(Debug, Serialize)]
pub struct PayrunBatchResponse {
    pub message: &'static str,
    pub count: usize,
}

/// A stored payrun.
#[derive(Debug, Serialize)]
pub struct PayrunItem {
    pub id: i32,
    pub employee: String,
    pub total_hours: f64,
    pub total_km: i32,
    pub total_remittance: f64,
    pub date: String,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

impl From<Payrun> for PayrunItem {
    fn from(p: Payrun) -> Self {
        Self {
            id: p.id,
            employee: p.employee,
            total_hours: p.total_hours,
            total_km: p.total_km,
            total_remittance: p.total_remittance,
            date: p.date,
            time_created: p.time_created,
            time_updated: p.time_updated,
        }
    }
}
