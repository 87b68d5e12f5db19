mod common;

use care_records::domain::entities::{NewInvoice, NewShiftReport};
use care_records::domain::repositories::{Page, ShiftReportRepository};
use care_records::infrastructure::persistence::PgShiftReportRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_report(client: &str) -> NewShiftReport {
    NewShiftReport {
        date: "2023-12-01".to_string(),
        client_name: client.to_string(),
        support_provider: "Sam".to_string(),
        participants_welfare: "Good".to_string(),
        activity: "Cooking".to_string(),
    }
}

fn new_invoice() -> NewInvoice {
    NewInvoice {
        shiftreport_id: None,
        client: "Jane Roe".to_string(),
        employee: "Sam".to_string(),
        date: "2023-12-01".to_string(),
        hours: 2.0,
        travel_time: 0.0,
        travel_km: 0,
        remittance: 110.0,
        invoice_num: "INV-R1".to_string(),
        service_type: Some("Core support".to_string()),
        notes: None,
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgShiftReportRepository::new(Arc::new(pool));

    let created = repo.create(new_report("Jane Roe")).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap();

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.client_name, "Jane Roe");
    assert_eq!(found.time_created, created.time_created);
    assert!(found.time_updated.is_none());
}

#[sqlx::test]
async fn test_find_missing_returns_none(pool: PgPool) {
    let repo = PgShiftReportRepository::new(Arc::new(pool));

    let result = repo.find_by_id(-1).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_list_summaries_unpaged_returns_everything(pool: PgPool) {
    let repo = PgShiftReportRepository::new(Arc::new(pool));
    for i in 0..4 {
        repo.create(new_report(&format!("Client {i}"))).await.unwrap();
    }

    let all = repo.list_summaries(None).await.unwrap();
    let paged = repo.list_summaries(Some(Page::new(2, 3))).await.unwrap();

    assert_eq!(all.len(), 4);
    assert_eq!(all[0].client, "Client 3");
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].client, "Client 0");
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[sqlx::test]
async fn test_create_with_invoice_links_rows(pool: PgPool) {
    let repo = PgShiftReportRepository::new(Arc::new(pool.clone()));

    let (report, invoice) = repo
        .create_with_invoice(new_report("Jane Roe"), new_invoice())
        .await
        .unwrap();

    assert_eq!(invoice.shiftreport_id, Some(report.id));
    assert_eq!(invoice.service_type.as_deref(), Some("Core support"));
    assert_eq!(common::count_rows(&pool, "invoice").await, 1);
}

#[sqlx::test]
async fn test_updates_stamp_time_updated(pool: PgPool) {
    let repo = PgShiftReportRepository::new(Arc::new(pool.clone()));
    let created = repo.create(new_report("Jane Roe")).await.unwrap();

    sqlx::query("UPDATE shiftreport SET activity = 'Swimming' WHERE id = $1")
        .bind(created.id)
        .execute(&pool)
        .await
        .unwrap();

    let updated = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert!(updated.time_updated.is_some());
}
