//! PostgreSQL implementation of invoice repository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Invoice, NewInvoice};
use crate::domain::repositories::{DateRangeFilter, InvoiceRepository};
use crate::error::AppError;

/// Inserts one invoice on the given connection.
///
/// Takes a plain connection so the statement can run either on a pooled
/// connection or inside a caller-owned transaction.
pub(crate) async fn insert_invoice(
    conn: &mut PgConnection,
    new_invoice: &NewInvoice,
) -> Result<Invoice, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        r#"
        INSERT INTO invoice (
            shiftreport_id, client, employee, date, hours, travel_time,
            travel_km, remittance, invoice_num, service_type, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, shiftreport_id, client, employee, date, hours, travel_time,
                  travel_km, remittance, invoice_num, service_type, notes,
                  time_created, time_updated
        "#,
    )
    .bind(new_invoice.shiftreport_id)
    .bind(&new_invoice.client)
    .bind(&new_invoice.employee)
    .bind(&new_invoice.date)
    .bind(new_invoice.hours)
    .bind(new_invoice.travel_time)
    .bind(new_invoice.travel_km)
    .bind(new_invoice.remittance)
    .bind(&new_invoice.invoice_num)
    .bind(&new_invoice.service_type)
    .bind(&new_invoice.notes)
    .fetch_one(conn)
    .await
}

/// PostgreSQL repository for the `invoice` table.
///
/// Date filters compare the free-text `date` column with `COLLATE "C"` so
/// ordering is byte-wise regardless of the database's default collation.
pub struct PgInvoiceRepository {
    pool: Arc<PgPool>,
}

impl PgInvoiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError> {
        let mut conn = self.pool.acquire().await?;
        let invoice = insert_invoice(&mut conn, &new_invoice).await?;
        Ok(invoice)
    }

    async fn list(&self) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, shiftreport_id, client, employee, date, hours, travel_time,
                   travel_km, remittance, invoice_num, service_type, notes,
                   time_created, time_updated
            FROM invoice
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(invoices)
    }

    async fn find_by_client(&self, filter: &DateRangeFilter) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, shiftreport_id, client, employee, date, hours, travel_time,
                   travel_km, remittance, invoice_num, service_type, notes,
                   time_created, time_updated
            FROM invoice
            WHERE date COLLATE "C" BETWEEN $1 AND $2
              AND ($3::text IS NULL OR client = $3)
            ORDER BY id
            "#,
        )
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(&filter.name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(invoices)
    }

    async fn find_by_employee(&self, filter: &DateRangeFilter) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, shiftreport_id, client, employee, date, hours, travel_time,
                   travel_km, remittance, invoice_num, service_type, notes,
                   time_created, time_updated
            FROM invoice
            WHERE date COLLATE "C" BETWEEN $1 AND $2
              AND ($3::text IS NULL OR employee = $3)
            ORDER BY date COLLATE "C" ASC, id ASC
            "#,
        )
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(&filter.name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(invoices)
    }
}
