//! DTOs for invoice endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Invoice, NewInvoice};

/// Request body for `POST /invoice/`.
///
/// `serviceType` keeps its camelCase wire name. `shiftreport_id`,
/// `serviceType` and `notes` may be omitted or `null`.
#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    #[serde(default)]
    pub shiftreport_id: Option<i32>,
    pub client: String,
    pub employee: String,
    pub date: String,
    pub hours: f64,
    pub travel_time: f64,
    pub travel_km: i32,
    pub remittance: f64,
    pub invoice_num: String,
    #[serde(default, rename = "serviceType")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<InvoiceRequest> for NewInvoice {
    fn from(req: InvoiceRequest) -> Self {
        NewInvoice {
            shiftreport_id: req.shiftreport_id,
            client: req.client,
            employee: req.employee,
            date: req.date,
            hours: req.hours,
            travel_time: req.travel_time,
            travel_km: req.travel_km,
            remittance: req.remittance,
            invoice_num: req.invoice_num,
            service_type: req.service_type,
            notes: req.notes,
        }
    }
}

/// A stored invoice.
#[derive(Debug, Serialize)]
pub struct InvoiceItem {
    pub id: i32,
    pub shiftreport_id: Option<i32>,
    pub client: String,
    pub employee: String,
    pub date: String,
    pub hours: f64,
    pub travel_time: f64,
    pub travel_km: i32,
    pub remittance: f64,
    pub invoice_num: String,
    #[serde(rename = "serviceType")]
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

impl From<Invoice> for InvoiceItem {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            shiftreport_id: i.shiftreport_id,
            client: i.client,
            employee: i.employee,
            date: i.date,
            hours: i.hours,
            travel_time: i.travel_time,
            travel_km: i.travel_km,
            remittance: i.remittance,
            invoice_num: i.invoice_num,
            service_type: i.service_type,
            notes: i.notes,
            time_created: i.time_created,
            time_updated: i.time_updated,
        }
    }
}
