//! Repository traits for people records (clients and employees).

use crate::domain::entities::{Client, Employee, NewClient, NewEmployee};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for clients.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Inserts a client and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError>;

    /// Lists every client in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Client>, AppError>;
}

/// Repository interface for employees.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEmployeeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts an employee and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError>;

    /// Lists every employee in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;
}
