#![allow(dead_code)]

use axum_test::TestServer;
use care_records::api::routes::record_routes;
use care_records::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Test server exposing every record route.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = record_routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn create_test_shift_report(pool: &PgPool, client: &str, date: &str) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO shiftreport (date, client_name, support_provider, participants_welfare, activity)
        VALUES ($1, $2, 'Sam', 'Settled', 'Shopping')
        RETURNING id
        "#,
    )
    .bind(date)
    .bind(client)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_invoice(
    pool: &PgPool,
    client: &str,
    employee: &str,
    date: &str,
    invoice_num: &str,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO invoice (client, employee, date, hours, travel_time, travel_km, remittance, invoice_num)
        VALUES ($1, $2, $3, 2.0, 0.5, 10, 120.0, $4)
        RETURNING id
        "#,
    )
    .bind(client)
    .bind(employee)
    .bind(date)
    .bind(invoice_num)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_payrun(pool: &PgPool, employee: &str, date: &str) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO payrun (employee, total_hours, total_km, total_remittance, date)
        VALUES ($1, 38.0, 100, 1900.0, $2)
        RETURNING id
        "#,
    )
    .bind(employee)
    .bind(date)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
