//! User CRUD integration tests exercised over HTTP.

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use serial_test::serial;
use user_management_api::routes::{create_api_router, create_app_state};

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
async fn test_create_and_get_user() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    let response = server
        .post("/users")
        .add_header(header::AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Alice", "email": "alice@example.com", "age": 30}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], "alice@example.com");
    assert_eq!(created["age"], 30);
    assert_eq!(created["version"], 1);

    let id = created["id"].as_str().unwrap();
    let response = server.get(&format!("/users/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
#[serial]
async fn test_list_users() {
    init_env();
    let server = create_test_server();
    let token = login(&server).await;

    for (name, email) in [("Alice", "alice@example.com"), ("Bob", "bob@example.com")] {
        let response = server
            .post("/users")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({"name": name, "email": email, "age": 30}))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let users: Value = response.json();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_update_user_with_matching_version() {
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
        .add_header(header::IF_MATCH, HeaderValue::from_static("1"))
        .json(&json!({"age": 31}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let updated: Value = response.json();
    assert_eq!(updated["age"], 31);
    assert_eq!(updated["version"], 2);
    assert_eq!(updated["name"], "Alice");
}

#[tokio::test]
#[serial]
async fn test_delete_user() {
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
        .delete(&format!("/users/{id}"))
        .add_header(header::AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&format!("/users/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn test_openapi_endpoint() {
    init_env();
    let server = create_test_server();

    let response = server.get("/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let spec: Value = response.json();
    assert!(spec["paths"]["/users"].is_object());
    assert!(spec["paths"]["/auth/login"].is_object());
}
