//! Invoice entity.

use chrono::{DateTime, Utc};

/// A billable record.
///
/// `shiftreport_id` is an informal link to [`super::ShiftReport`]; it is
/// `None` for invoices created on their own and is never checked against
/// the shift report table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Invoice {
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
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Input data for creating a new invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub shiftreport_id: Option<i32>,
    pub client: String,
    pub employee: String,
    pub date: String,
    pub hours: f64,
    pub travel_time: f64,
    pub travel_km: i32,
    pub remittance: f64,
    pub invoice_num: String,
    pub service_type: Option<String>,
    pub notes: Option<String>,
}

impl NewInvoice {
    /// Points the invoice at the given shift report, replacing any link
    /// supplied by the caller.
    pub fn linked_to(mut self, shiftreport_id: i32) -> Self {
        self.shiftreport_id = Some(shiftreport_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewInvoice {
        NewInvoice {
            shiftreport_id: Some(99),
            client: "Jane Roe".to_string(),
            employee: "Sam".to_string(),
            date: "2023-12-01".to_string(),
            hours: 3.5,
            travel_time: 0.5,
            travel_km: 12,
            remittance: 210.0,
            invoice_num: "INV-001".to_string(),
            service_type: None,
            notes: None,
        }
    }

    #[test]
    fn test_linked_to_overrides_existing_link() {
        let invoice = sample().linked_to(4);
        assert_eq!(invoice.shiftreport_id, Some(4));
    }

    #[test]
    fn test_linked_to_keeps_other_fields() {
        let original = sample();
        let linked = original.clone().linked_to(4);

        assert_eq!(linked.invoice_num, original.invoice_num);
        assert_eq!(linked.hours, original.hours);
    }
}
