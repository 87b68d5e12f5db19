mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

fn payrun(employee: &str, total_km: i32, date: &str) -> serde_json::Value {
    json!({
        "employee": employee,
        "total_hours": 38.0,
        "total_km": total_km,
        "total_remittance": 1900.0,
        "date": date
    })
}

#[sqlx::test]
async fn test_create_and_list_payrun(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/payrun")
        .json(&payrun("Sam", 120, "2023-12-15"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<serde_json::Value>();
    assert_eq!(created["employee"], "Sam");
    assert_eq!(created["total_km"], 120);

    let list = server.get("/payrun").await.json::<Vec<serde_json::Value>>();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], created["id"]);
}

#[sqlx::test]
async fn test_store_payrun_batch(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/store_payrun_data")
        .json(&json!({
            "records": [
                payrun("Sam", 120, "2023-12-15"),
                payrun("Alex", 0, "2023-12-15"),
                payrun("Kim", 45, "2023-12-15")
            ]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 3);
    assert_eq!(common::count_rows(&pool, "payrun").await, 3);
}

#[sqlx::test]
async fn test_empty_batch_stores_nothing(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/store_payrun_data")
        .json(&json!({ "records": [] }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["count"], 0);
    assert_eq!(common::count_rows(&pool, "payrun").await, 0);
}

#[sqlx::test]
async fn test_batch_is_all_or_nothing(pool: PgPool) {
    sqlx::query("ALTER TABLE payrun ADD CONSTRAINT payrun_km_non_negative CHECK (total_km >= 0)")
        .execute(&pool)
        .await
        .unwrap();
    let server = common::make_server(pool.clone());

    let response = server
        .post("/store_payrun_data")
        .json(&json!({
            "records": [
                payrun("Sam", 120, "2023-12-15"),
                payrun("Alex", -1, "2023-12-15")
            ]
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
    assert_eq!(common::count_rows(&pool, "payrun").await, 0);
}

#[sqlx::test]
async fn test_filter_payruns_by_employee(pool: PgPool) {
    common::create_test_payrun(&pool, "Sam", "2023-11-30").await;
    common::create_test_payrun(&pool, "Sam", "2023-12-01").await;
    common::create_test_payrun(&pool, "Alex", "2023-12-15").await;
    common::create_test_payrun(&pool, "Sam", "2023-12-31").await;
    let server = common::make_server(pool);

    let response = server
        .get("/payruns")
        .add_query_param("start_date", "2023-12-01")
        .add_query_param("end_date", "2023-12-31")
        .add_query_param("employee", "Sam")
        .await;

    response.assert_status_ok();
    let dates: Vec<String> = response
        .json::<Vec<serde_json::Value>>()
        .iter()
        .map(|p| p["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2023-12-01", "2023-12-31"]);
}

#[sqlx::test]
async fn test_filter_payruns_without_employee(pool: PgPool) {
    common::create_test_payrun(&pool, "Sam", "2023-12-01").await;
    common::create_test_payrun(&pool, "Alex", "2023-12-15").await;
    let server = common::make_server(pool);

    let response = server
        .get("/payruns")
        .add_query_param("start_date", "2023-12-01")
        .add_query_param("end_date", "2023-12-31")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<serde_json::Value>>().len(), 2);
}
