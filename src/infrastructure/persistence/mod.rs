//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Insert
//! statements are free functions over `&mut PgConnection`, so multi-row
//! operations can run them inside a single transaction.
//!
//! # Repositories
//!
//! - [`PgClientRepository`] / [`PgEmployeeRepository`] - People records
//! - [`PgShiftReportRepository`] - Shift reports and the combined report + invoice insert
//! - [`PgInvoiceRepository`] - Invoice storage and date-range filters
//! - [`PgPayrunRepository`] - Payrun storage and bulk import

pub mod pg_client_repository;
pub mod pg_invoice_repository;
pub mod pg_payrun_repository;
pub mod pg_shift_report_repository;

pub use pg_client_repository::{PgClientRepository, PgEmployeeRepository};
pub use pg_invoice_repository::PgInvoiceRepository;
pub use pg_payrun_repository::PgPayrunRepository;
pub use pg_shift_report_repository::PgShiftReportRepository;
