//! Application layer services implementing the record operations.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::ClientService`] / [`services::EmployeeService`] - People records
//! - [`services::ShiftReportService`] - Shift reports, pagination and the
//!   combined report + invoice creation
//! - [`services::InvoiceService`] - Invoices and date-range queries
//! - [`services::PayrunService`] - Payruns and atomic bulk import
//! - [`demo_data`] - Read-only demonstration dataset

pub mod demo_data;
pub mod services;
