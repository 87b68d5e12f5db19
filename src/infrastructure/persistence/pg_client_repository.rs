//! PostgreSQL implementations of the people repositories.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Client, Employee, NewClient, NewEmployee};
use crate::domain::repositories::{ClientRepository, EmployeeRepository};
use crate::error::AppError;

/// PostgreSQL repository for the `client` table.
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO client (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age, time_created, time_updated
            "#,
        )
        .bind(&new_client.name)
        .bind(new_client.age)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(client)
    }

    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, age, time_created, time_updated
            FROM client
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clients)
    }
}

/// PostgreSQL repository for the `employee` table.
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age, time_created, time_updated
            "#,
        )
        .bind(&new_employee.name)
        .bind(new_employee.age)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, age, time_created, time_updated
            FROM employee
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(employees)
    }
}
