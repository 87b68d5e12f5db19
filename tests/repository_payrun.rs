mod common;

use care_records::domain::entities::NewPayrun;
use care_records::domain::repositories::{DateRangeFilter, PayrunRepository};
use care_records::infrastructure::persistence::PgPayrunRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_payrun(employee: &str, date: &str) -> NewPayrun {
    NewPayrun {
        employee: employee.to_string(),
        total_hours: 20.0,
        total_km: 40,
        total_remittance: 1000.0,
        date: date.to_string(),
    }
}

#[sqlx::test]
async fn test_create_many_returns_rows_in_input_order(pool: PgPool) {
    let repo = PgPayrunRepository::new(Arc::new(pool));

    let stored = repo
        .create_many(vec![
            new_payrun("Sam", "2023-12-15"),
            new_payrun("Alex", "2023-12-15"),
        ])
        .await
        .unwrap();

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].employee, "Sam");
    assert_eq!(stored[1].employee, "Alex");
    assert!(stored[0].id < stored[1].id);
}

#[sqlx::test]
async fn test_create_many_rolls_back_on_failure(pool: PgPool) {
    sqlx::query("ALTER TABLE payrun ADD CONSTRAINT payrun_employee_not_blank CHECK (employee <> '')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgPayrunRepository::new(Arc::new(pool.clone()));

    let result = repo
        .create_many(vec![
            new_payrun("Sam", "2023-12-15"),
            new_payrun("", "2023-12-15"),
        ])
        .await;

    assert!(result.is_err());
    assert_eq!(common::count_rows(&pool, "payrun").await, 0);
}

#[sqlx::test]
async fn test_find_by_employee_range_bounds(pool: PgPool) {
    let repo = PgPayrunRepository::new(Arc::new(pool));
    for date in ["2023-11-30", "2023-12-01", "2023-12-31", "2024-01-01"] {
        repo.create(new_payrun("Sam", date)).await.unwrap();
    }

    let filter = DateRangeFilter::new("2023-12-01", "2023-12-31").with_name(Some("Sam".into()));
    let found = repo.find_by_employee(&filter).await.unwrap();

    let dates: Vec<&str> = found.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2023-12-01", "2023-12-31"]);
}
