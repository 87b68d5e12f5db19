//! PostgreSQL implementation of payrun repository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewPayrun, Payrun};
use crate::domain::repositories::{DateRangeFilter, PayrunRepository};
use crate::error::AppError;

async fn insert_payrun(conn: &mut PgConnection, new_payrun: &NewPayrun) -> Result<Payrun, sqlx::Error> {
    sqlx::query_as::<_, Payrun>(
        r#"
        INSERT INTO payrun (employee, total_hours, total_km, total_remittance, date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, employee, total_hours, total_km, total_remittance, date,
                  time_created, time_updated
        "#,
    )
    .bind(&new_payrun.employee)
    .bind(new_payrun.total_hours)
    .bind(new_payrun.total_km)
    .bind(new_payrun.total_remittance)
    .bind(&new_payrun.date)
    .fetch_one(conn)
    .await
}

/// PostgreSQL repository for the `payrun` table.
pub struct PgPayrunRepository {
    pool: Arc<PgPool>,
}

impl PgPayrunRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayrunRepository for PgPayrunRepository {
    async fn create(&self, new_payrun: NewPayrun) -> Result<Payrun, AppError> {
        let mut conn = self.pool.acquire().await?;
        let payrun = insert_payrun(&mut conn, &new_payrun).await?;
        Ok(payrun)
    }

    async fn create_many(&self, new_payruns: Vec<NewPayrun>) -> Result<Vec<Payrun>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(new_payruns.len());

        for new_payrun in &new_payruns {
            stored.push(insert_payrun(&mut tx, new_payrun).await?);
        }

        tx.commit().await?;
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Payrun>, AppError> {
        let payruns = sqlx::query_as::<_, Payrun>(
            r#"
            SELECT id, employee, total_hours, total_km, total_remittance, date,
                   time_created, time_updated
            FROM payrun
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(payruns)
    }

    async fn find_by_employee(&self, filter: &DateRangeFilter) -> Result<Vec<Payrun>, AppError> {
        let payruns = sqlx::query_as::<_, Payrun>(
            r#"
            SELECT id, employee, total_hours, total_km, total_remittance, date,
                   time_created, time_updated
            FROM payrun
            WHERE date COLLATE "C" BETWEEN $1 AND $2
              AND ($3::text IS NULL OR employee = $3)
            ORDER BY id
            "#,
        )
        .bind(&filter.start_date)
        .bind(&filter.end_date)
        .bind(&filter.name)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(payruns)
    }
}
