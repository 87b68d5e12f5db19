//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    ClientService, EmployeeService, InvoiceService, PayrunService, ShiftReportService,
};
use crate::infrastructure::persistence::{
    PgClientRepository, PgEmployeeRepository, PgInvoiceRepository, PgPayrunRepository,
    PgShiftReportRepository,
};

/// Handles to the services backing the HTTP API.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub client_service: Arc<ClientService<PgClientRepository>>,
    pub employee_service: Arc<EmployeeService<PgEmployeeRepository>>,
    pub shift_report_service: Arc<ShiftReportService<PgShiftReportRepository>>,
    pub invoice_service: Arc<InvoiceService<PgInvoiceRepository>>,
    pub payrun_service: Arc<PayrunService<PgPayrunRepository>>,
}

impl AppState {
    /// Wires PostgreSQL repositories and services on top of one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let client_repo = Arc::new(PgClientRepository::new(pool.clone()));
        let employee_repo = Arc::new(PgEmployeeRepository::new(pool.clone()));
        let shift_report_repo = Arc::new(PgShiftReportRepository::new(pool.clone()));
        let invoice_repo = Arc::new(PgInvoiceRepository::new(pool.clone()));
        let payrun_repo = Arc::new(PgPayrunRepository::new(pool.clone()));

        Self {
            pool,
            client_service: Arc::new(ClientService::new(client_repo)),
            employee_service: Arc::new(EmployeeService::new(employee_repo)),
            shift_report_service: Arc::new(ShiftReportService::new(shift_report_repo)),
            invoice_service: Arc::new(InvoiceService::new(invoice_repo)),
            payrun_service: Arc::new(PayrunService::new(payrun_repo)),
        }
    }
}
