//! Client entity.

use chrono::{DateTime, Utc};

/// A person receiving care services.
///
/// Names are not unique; shift reports and invoices refer to clients by
/// name only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Input data for creating a new client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_accepts_any_age() {
        let new_client = NewClient {
            name: "Jane Roe".to_string(),
            age: -1,
        };

        assert_eq!(new_client.age, -1);
    }

    #[test]
    fn test_client_time_updated_defaults_to_none() {
        let client = Client {
            id: 1,
            name: "Jane Roe".to_string(),
            age: 42,
            time_created: Utc::now(),
            time_updated: None,
        };

        assert!(client.time_updated.is_none());
    }
}
