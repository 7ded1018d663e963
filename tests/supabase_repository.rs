//! Supabase repository tests against a mock PostgREST server.
//!
//! Exercises the wire behavior of `SupabaseUserRepository`: filters, the
//! insert with `return=representation`, duplicate rejection, defensive
//! timestamp parsing, and error surfacing when the store misbehaves.

use chrono::Utc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use authgate::config::SupabaseConfig;
use authgate::repository::{RepositoryError, SupabaseUserRepository, UserRepository};

fn repository_for(server: &MockServer) -> SupabaseUserRepository {
    SupabaseUserRepository::new(&SupabaseConfig {
        url: server.uri(),
        anon_key: "test-anon-key".to_string(),
        service_key: None,
    })
    .unwrap()
}

fn user_row(id: i64, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "name": "Ana",
        "hashed_password": "$2b$12$abcdefghijklmnopqrstuv",
        "created_at": "2024-03-01T12:30:00+00:00",
        "updated_at": "2024-03-01T12:30:00+00:00",
    })
}

#[tokio::test]
async fn test_get_by_email_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.ana@example.com"))
        .and(query_param("limit", "1"))
        .and(header("apikey", "test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            user_row(7, "ana@example.com")
        ])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let user = repo.get_by_email("ana@example.com").await.unwrap().unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.created_at.timestamp(), 1709296200);
}

#[tokio::test]
async fn test_get_by_email_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    assert!(repo.get_by_email("ghost@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_id_filters_on_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            user_row(7, "ana@example.com")
        ])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let user = repo.get_by_id(7).await.unwrap().unwrap();
    assert_eq!(user.email, "ana@example.com");
}

#[tokio::test]
async fn test_create_inserts_and_returns_row() {
    let server = MockServer::start().await;

    // Duplicate check comes back empty.
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header("prefer", "return=representation"))
        .and(header("apikey", "test-anon-key"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([
            user_row(1, "new@example.com")
        ])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let user = repo
        .create("new@example.com", "Ana", "$2b$12$hash")
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "new@example.com");
}

#[tokio::test]
async fn test_create_rejects_existing_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            user_row(3, "taken@example.com")
        ])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let err = repo
        .create("taken@example.com", "Ana", "$2b$12$hash")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateEmail));
}

#[tokio::test]
async fn test_create_empty_representation_is_storage_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    // Insert "succeeds" but returns nothing, as happens with row security
    // or permission misconfigurations.
    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let err = repo
        .create("new@example.com", "Ana", "$2b$12$hash")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Storage(_)));
}

#[tokio::test]
async fn test_server_error_surfaces_as_storage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let repo = repository_for(&server);
    let err = repo.get_by_email("ana@example.com").await.unwrap_err();
    assert!(matches!(err, RepositoryError::Storage(_)));
}

#[tokio::test]
async fn test_malformed_timestamps_fall_back_to_now() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 9,
            "email": "ana@example.com",
            "name": "Ana",
            "hashed_password": "$2b$12$hash",
            "created_at": "definitely-not-a-date",
            "updated_at": null,
        }])))
        .mount(&server)
        .await;

    let before = Utc::now();
    let repo = repository_for(&server);
    let user = repo.get_by_email("ana@example.com").await.unwrap().unwrap();
    let after = Utc::now();

    assert!(user.created_at >= before && user.created_at <= after);
    assert!(user.updated_at >= before && user.updated_at <= after);
}
