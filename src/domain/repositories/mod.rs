//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ClientRepository`] / [`EmployeeRepository`] - People records
//! - [`ShiftReportRepository`] - Shift reports, including the combined
//!   report + invoice insert
//! - [`InvoiceRepository`] - Invoices and date-range filters
//! - [`PayrunRepository`] - Payruns, including atomic bulk import

pub mod client_repository;
pub mod filter;
pub mod invoice_repository;
pub mod payrun_repository;
pub mod shift_report_repository;

pub use client_repository::{ClientRepository, EmployeeRepository};
pub use filter::{DateRangeFilter, Page};
pub use invoice_repository::InvoiceRepository;
pub use payrun_repository::PayrunRepository;
pub use shift_report_repository::ShiftReportRepository;

#[cfg(test)]
pub use client_repository::{MockClientRepository, MockEmployeeRepository};
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
#[cfg(test)]
pub use payrun_repository::MockPayrunRepository;
#[cfg(test)]
pub use shift_report_repository::MockShiftReportRepository;
