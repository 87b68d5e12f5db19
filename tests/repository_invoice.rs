mod common;

use care_records::domain::repositories::{DateRangeFilter, InvoiceRepository};
use care_records::infrastructure::persistence::PgInvoiceRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_find_by_client_without_name(pool: PgPool) {
    common::create_test_invoice(&pool, "Jane Roe", "Sam", "2023-12-05", "INV-1").await;
    common::create_test_invoice(&pool, "John Doe", "Alex", "2023-12-06", "INV-2").await;
    common::create_test_invoice(&pool, "John Doe", "Alex", "2024-02-01", "INV-3").await;
    let repo = PgInvoiceRepository::new(Arc::new(pool));

    let filter = DateRangeFilter::new("2023-12-01", "2023-12-31");
    let found = repo.find_by_client(&filter).await.unwrap();

    assert_eq!(found.len(), 2);
}

#[sqlx::test]
async fn test_find_by_client_is_exact_match(pool: PgPool) {
    common::create_test_invoice(&pool, "Jane Roe", "Sam", "2023-12-05", "INV-1").await;
    common::create_test_invoice(&pool, "Jane", "Sam", "2023-12-05", "INV-2").await;
    let repo = PgInvoiceRepository::new(Arc::new(pool));

    let filter = DateRangeFilter::new("2023-12-01", "2023-12-31").with_name(Some("Jane".into()));
    let found = repo.find_by_client(&filter).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].invoice_num, "INV-2");
}

#[sqlx::test]
async fn test_find_by_employee_orders_by_date(pool: PgPool) {
    common::create_test_invoice(&pool, "Jane Roe", "Sam", "2023-12-09", "INV-late").await;
    common::create_test_invoice(&pool, "Jane Roe", "Sam", "2023-12-02", "INV-early").await;
    let repo = PgInvoiceRepository::new(Arc::new(pool));

    let filter = DateRangeFilter::new("2023-12-01", "2023-12-31").with_name(Some("Sam".into()));
    let found = repo.find_by_employee(&filter).await.unwrap();

    assert_eq!(found[0].invoice_num, "INV-early");
    assert_eq!(found[1].invoice_num, "INV-late");
}
