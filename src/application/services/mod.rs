//! Business logic services for the application layer.

pub mod client_service;
pub mod employee_service;
pub mod invoice_service;
pub mod payrun_service;
pub mod shift_report_service;

pub use client_service::ClientService;
pub use employee_service::EmployeeService;
pub use invoice_service::InvoiceService;
pub use payrun_service::PayrunService;
pub use shift_report_service::ShiftReportService;
