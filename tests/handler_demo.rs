use axum::{Router, routing::get};
use axum_test::TestServer;
use care_records::api::handlers::demo_data_handler;

fn make_server() -> TestServer {
    let app = Router::new().route("/api/data", get(demo_data_handler));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_default_page() {
    let server = make_server();

    let response = server.get("/api/data").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["totalRows"], 100);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0]["id"], 1);
    assert!(rows[0]["client"].is_string());
    assert!(rows[0]["support_provider"].is_string());
}

#[tokio::test]
async fn test_last_partial_page() {
    let server = make_server();

    let body = server
        .get("/api/data")
        .add_query_param("page", 7)
        .add_query_param("page_size", 15)
        .await
        .json::<serde_json::Value>();

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["id"], 91);
    assert_eq!(rows[9]["id"], 100);
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let server = make_server();

    let body = server
        .get("/api/data")
        .add_query_param("page", 8)
        .add_query_param("page_size", 15)
        .await
        .json::<serde_json::Value>();

    assert_eq!(body["rows"], serde_json::json!([]));
    assert_eq!(body["totalRows"], 100);
}

#[tokio::test]
async fn test_page_size_over_limit_is_rejected() {
    let server = make_server();

    let response = server
        .get("/api/data")
        .add_query_param("page_size", 101)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_non_numeric_page_is_rejected() {
    let server = make_server();

    let response = server.get("/api/data").add_query_param("page", "two").await;

    response.assert_status_bad_request();
}
