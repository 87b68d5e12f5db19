//! API route configuration.

use crate::api::handlers::{
    create_client_handler, create_employee_handler, create_invoice_handler,
    create_payrun_handler, create_shift_invoice_handler, create_shift_report_handler,
    demo_data_handler, filter_invoices_by_client_handler, filter_invoices_by_employee_handler,
    filter_payruns_handler, get_shift_report_handler, list_clients_handler,
    list_employees_handler, list_invoices_handler, list_payruns_handler,
    list_shift_reports_handler, page_shift_reports_handler, store_payrun_data_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All record routes.
///
/// Paths are declared without trailing slashes; the top-level router trims
/// them from requests, so `/client/` and `/client` both match.
///
/// # Endpoints
///
/// - `POST/GET /client`                 - Create / list clients
/// - `POST/GET /employee`               - Create / list employees
/// - `POST     /shiftreport`            - Create a shift report
/// - `GET      /shiftreport/all`        - All shift report summaries with total
/// - `GET      /shiftreport/{id}`       - One shift report (404 if absent)
/// - `GET      /page/shift_reports`     - Paginated shift report summaries
/// - `POST/GET /invoice`                - Create / list invoices
/// - `GET      /invoices`               - Invoices by date range and client
/// - `GET      /invoices/employee`      - Invoices by date range and employee
/// - `POST/GET /payrun`                 - Create / list payruns
/// - `GET      /payruns`                - Payruns by date range and employee
/// - `POST     /store_payrun_data`      - Atomic bulk payrun import
/// - `POST     /api/shift_invoice`      - Atomic shift report + invoice creation
/// - `GET      /api/data`               - Demo dataset pagination
pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/client",
            get(list_clients_handler).post(create_client_handler),
        )
        .route(
            "/employee",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route("/shiftreport", post(create_shift_report_handler))
        .route("/shiftreport/all", get(list_shift_reports_handler))
        .route("/shiftreport/{id}", get(get_shift_report_handler))
        .route("/page/shift_reports", get(page_shift_reports_handler))
        .route(
            "/invoice",
            get(list_invoices_handler).post(create_invoice_handler),
        )
        .route("/invoices", get(filter_invoices_by_client_handler))
        .route("/invoices/employee", get(filter_invoices_by_employee_handler))
        .route(
            "/payrun",
            get(list_payruns_handler).post(create_payrun_handler),
        )
        .route("/payruns", get(filter_payruns_handler))
        .route("/store_payrun_data", post(store_payrun_data_handler))
        .route("/api/shift_invoice", post(create_shift_invoice_handler))
        .route("/api/data", get(demo_data_handler))
}
