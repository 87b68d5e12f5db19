//! PostgreSQL implementation of shift report repository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Invoice, NewInvoice, NewShiftReport, ShiftReport, ShiftReportSummary};
use crate::domain::repositories::{Page, ShiftReportRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::pg_invoice_repository::insert_invoice;

/// Inserts one shift report on the given connection.
pub(crate) async fn insert_shift_report(
    conn: &mut PgConnection,
    new_report: &NewShiftReport,
) -> Result<ShiftReport, sqlx::Error> {
    sqlx::query_as::<_, ShiftReport>(
        r#"
        INSERT INTO shiftreport (date, client_name, support_provider, participants_welfare, activity)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, client_name, date, support_provider, participants_welfare, activity,
                  time_created, time_updated
        "#,
    )
    .bind(&new_report.date)
    .bind(&new_report.client_name)
    .bind(&new_report.support_provider)
    .bind(&new_report.participants_welfare)
    .bind(&new_report.activity)
    .fetch_one(conn)
    .await
}

/// PostgreSQL repository for the `shiftreport` table.
///
/// The combined report + invoice insert runs both statements on one
/// transaction; dropping the transaction on an early `?` rolls it back.
pub struct PgShiftReportRepository {
    pool: Arc<PgPool>,
}

impl PgShiftReportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftReportRepository for PgShiftReportRepository {
    async fn create(&self, new_report: NewShiftReport) -> Result<ShiftReport, AppError> {
        let mut conn = self.pool.acquire().await?;
        let report = insert_shift_report(&mut conn, &new_report).await?;
        Ok(report)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ShiftReport>, AppError> {
        let report = sqlx::query_as::<_, ShiftReport>(
            r#"
            SELECT id, client_name, date, support_provider, participants_welfare, activity,
                   time_created, time_updated
            FROM shiftreport
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(report)
    }

    async fn list_summaries(&self, page: Option<Page>) -> Result<Vec<ShiftReportSummary>, AppError> {
        // NULL limit/offset mean "all rows" in PostgreSQL.
        let (limit, offset) = match page {
            Some(p) => (Some(p.limit), Some(p.offset)),
            None => (None, None),
        };

        let summaries = sqlx::query_as::<_, ShiftReportSummary>(
            r#"
            SELECT id, date, support_provider, client_name AS client
            FROM shiftreport
            ORDER BY time_created DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(summaries)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shiftreport")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn create_with_invoice(
        &self,
        new_report: NewShiftReport,
        new_invoice: NewInvoice,
    ) -> Result<(ShiftReport, Invoice), AppError> {
        let mut tx = self.pool.begin().await?;

        let report = insert_shift_report(&mut tx, &new_report).await?;
        let invoice = insert_invoice(&mut tx, &new_invoice.linked_to(report.id)).await?;

        tx.commit().await?;
        Ok((report, invoice))
    }
}
