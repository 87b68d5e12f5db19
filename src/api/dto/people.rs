//! DTOs for client and employee endpoints.
//!
//! Clients and employees share one wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Client, Employee, NewClient, NewEmployee};

/// Request body for `POST /client/` and `POST /employee/`.
#[derive(Debug, Deserialize)]
pub struct PersonRequest {
    pub name: String,
    pub age: i32,
}

impl From<PersonRequest> for NewClient {
    fn from(req: PersonRequest) -> Self {
        NewClient {
            name: req.name,
            age: req.age,
        }
    }
}

impl From<PersonRequest> for NewEmployee {
    fn from(req: PersonRequest) -> Self {
        NewEmployee {
            name: req.name,
            age: req.age,
        }
    }
}

/// A stored client or employee.
#[derive(Debug, Serialize)]
pub struct PersonItem {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

impl From<Client> for PersonItem {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            age: c.age,
            time_created: c.time_created,
            time_updated: c.time_updated,
        }
    }
}

impl From<Employee> for PersonItem {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            age: e.age,
            time_created: e.time_created,
            time_updated: e.time_updated,
        }
    }
}
