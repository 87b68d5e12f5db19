//! Core domain entities representing the record-keeping data model.
//!
//! Entities mirror one table row each and carry no behaviour beyond small
//! helpers. Cross-entity links (`Invoice::shiftreport_id`, the free-text
//! client/employee names) are informal: nothing enforces them.
//!
//! # Entity Types
//!
//! - [`Client`] - A person receiving care
//! - [`Employee`] - A support worker
//! - [`ShiftReport`] - A single care-support session
//! - [`Invoice`] - A billable record, optionally linked to a shift report
//! - [`Payrun`] - An aggregated payroll record for an employee
//!
//! # Design Pattern
//!
//! Each stored entity has a `New*` counterpart holding the insert payload.
//! The server assigns `id` and `time_created`.

pub mod client;
pub mod employee;
pub mod invoice;
pub mod payrun;
pub mod shift_report;

pub use client::{Client, NewClient};
pub use employee::{Employee, NewEmployee};
pub use invoice::{Invoice, NewInvoice};
pub use payrun::{NewPayrun, Payrun};
pub use shift_report::{NewShiftReport, ShiftReport, ShiftReportSummary};
