//! Employee entity.

use chrono::{DateTime, Utc};

/// A support worker. Invoices and payruns refer to employees by name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Input data for creating a new employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
}
