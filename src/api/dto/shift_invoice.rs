//! DTOs for the combined shift report + invoice endpoint.

use serde::{Deserialize, Serialize};

use super::invoice::{InvoiceItem, InvoiceRequest};
use super::shift_report::{ShiftReportItem, ShiftReportRequest};

/// Request body for `POST /api/shift_invoice`.
///
/// Any `shiftreport_id` inside `invoice` is replaced by the id of the
/// report created in the same request.
#[derive(Debug, Deserialize)]
pub struct ShiftInvoiceRequest {
    pub shiftreport: ShiftReportRequest,
    pub invoice: InvoiceRequest,
}

/// Response for `POST /api/shift_invoice`.
#[derive(Debug, Serialize)]
pub struct ShiftInvoiceResponse {
    pub message: &'static str,
    pub shiftreport: ShiftReportItem,
    pub invoice: InvoiceItem,
}
