//! Employee record service.

use std::sync::Arc;

use crate::domain::entities::{Employee, NewEmployee};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// Service for creating and listing employees.
pub struct EmployeeService<R: EmployeeRepository> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a new employee service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let employee = self.repository.create(new_employee).await?;
        tracing::debug!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    /// Lists every employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockEmployeeRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_employees() {
        let mut mock_repo = MockEmployeeRepository::new();

        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                Employee {
                    id: 1,
                    name: "Sam".to_string(),
                    age: 30,
                    time_created: Utc::now(),
                    time_updated: None,
                },
                Employee {
                    id: 2,
                    name: "Sam".to_string(),
                    age: 30,
                    time_created: Utc::now(),
                    time_updated: None,
                },
            ])
        });

        let service = EmployeeService::new(Arc::new(mock_repo));

        let employees = service.list_employees().await.unwrap();

        // Duplicate names are allowed.
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, employees[1].name);
    }
}
