//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod demo;
pub mod health;
pub mod invoices;
pub mod payruns;
pub mod people;
pub mod root;
pub mod shift_invoice;
pub mod shift_reports;

pub use demo::demo_data_handler;
pub use health::health_handler;
pub use invoices::{
    create_invoice_handler, filter_invoices_by_client_handler,
    filter_invoices_by_employee_handler, list_invoices_handler,
};
pub use payruns::{
    create_payrun_handler, filter_payruns_handler, list_payruns_handler, store_payrun_data_handler,
};
pub use people::{
    create_client_handler, create_employee_handler, list_clients_handler, list_employees_handler,
};
pub use root::root_handler;
pub use shift_invoice::create_shift_invoice_handler;
pub use shift_reports::{
    create_shift_report_handler, get_shift_report_handler, list_shift_reports_handler,
    page_shift_reports_handler,
};
