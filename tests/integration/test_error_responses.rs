//! End-to-end checks of the error responder through real routes.
//!
//! Verifies the body policy over HTTP: informative JSON for 400s, the fixed
//! placeholder for 403/404/409/412, no internal detail anywhere.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use serial_test::serial;
use user_management_api::routes::error::GENERIC_BODY;
use user_management_api::routes::{create_api_router, create_app_state};
use uuid::Uuid;

fn init_env() {
    // SAFETY: tests mutating process env are serialized with #[serial]
    unsafe {
        std::env::set_var(
            "JWT_SECRET",
            "integration-test-secret-0123456789abcdef0123456789abcdef",
        );
    }
}

fn create_test_server() -> TestServer {
    let app_state = create_app_state();
    let router = create_api_router().with_state(app_state);
    TestServer::new(router).unwrap()
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({"username": "admin", "password": "adminPass"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let tokens: Value = response.json();
    tokens["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[tokio::test]
#[serial]
async fn test_validation_failure_returns_400_with_message() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let response = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Alice", "email": "alice@example.com", "age": -5}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "age must be positive");
    assert_eq!(body["developer_message"], "age must be positive");
}

#[tokio::test]
#[serial]
async fn test_malformed_payload_returns_400_with_parse_detail() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let response = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{ this is not json"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert!(!body["developer_message"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_duplicate_email_returns_409_placeholder() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let payload = json!({"name": "Alice", "email": "alice@example.com", "age": 30});
    let response = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&payload)
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.text(), GENERIC_BODY);
}

#[tokio::test]
#[serial]
async fn test_unknown_id_returns_404_placeholder() {
    init_env();
    let server = create_test_server();

    let response = server.get(&format!("/users/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), GENERIC_BODY);
}

#[tokio::test]
#[serial]
async fn test_version_mismatch_returns_412_placeholder() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let created: Value = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Alice", "email": "alice@example.com", "age": 30}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/users/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .add_header(header::IF_MATCH, HeaderValue::from_static("7"))
        .json(&json!({"age": 31}))
        .await;
    assert_eq!(response.status_code(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(response.text(), GENERIC_BODY);
}

#[tokio::test]
#[serial]
async fn test_unparsable_if_match_returns_400() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let created: Value = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Alice", "email": "alice@example.com", "age": 30}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/users/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .add_header(header::IF_MATCH, HeaderValue::from_static("not-a-version"))
        .json(&json!({"age": 31}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["message"], "invalid If-Match header");
}
