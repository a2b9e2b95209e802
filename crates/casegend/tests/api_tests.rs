//! Integration tests for the casegend HTTP API.
//!
//! The remote completion endpoint is stubbed with wiremock; the router is
//! exercised in-process with tower's oneshot.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use casegen_common::Config;
use casegend::server::{app, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(base_url: &str, api_key: &str) -> AppState {
    AppState::new(Config {
        api_key: api_key.to_string(),
        model: "gpt-4o-mini".to_string(),
        base_url: base_url.to_string(),
    })
}

/// Completion envelope whose assistant message carries `content`.
fn completion_body(content: &str) -> Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

async fn post_generate(state: AppState, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_index_serves_the_form() {
    let state = test_state("http://127.0.0.1:1", "test-key");

    let response = app(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Test Case Generator"));
}

#[tokio::test]
async fn test_health_reports_the_configured_model() {
    let state = test_state("http://127.0.0.1:1", "test-key");

    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let health: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["model"], "gpt-4o-mini");
}

#[tokio::test]
async fn test_generate_returns_shaped_cases() {
    let server = MockServer::start().await;

    let reply = r#"{"test_cases": [{
        "title": "Login works",
        "preconditions": "User exists",
        "steps": ["Open app", "Enter credentials", "Submit"],
        "expected_result": "User is logged in"
    }]}"#;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        test_state(&server.uri(), "test-key"),
        json!({ "description": "User should be able to log in" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["test_cases"][0]["title"], "Login works");
    assert_eq!(body["test_cases"][0]["steps"].as_array().unwrap().len(), 3);
    assert_eq!(body["raw"], reply);
}

#[tokio::test]
async fn test_empty_reply_reports_zero_cases() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(r#"{"test_cases": []}"#)),
        )
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        test_state(&server.uri(), "test-key"),
        json!({ "description": "Anything" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["test_cases"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_description_is_rejected_without_a_call() {
    let server = MockServer::start().await;

    let (status, body) = post_generate(
        test_state(&server.uri(), "test-key"),
        json!({ "description": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "bad_request");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_credential_maps_to_configuration_error() {
    let server = MockServer::start().await;

    let (status, body) = post_generate(
        test_state(&server.uri(), ""),
        json!({ "description": "User can log in" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["kind"], "configuration");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_failure_maps_to_remote_call_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        test_state(&server.uri(), "test-key"),
        json!({ "description": "User can log in" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "remote_call");
}

#[tokio::test]
async fn test_non_json_reply_maps_to_malformed_with_raw_preserved() {
    let server = MockServer::start().await;

    let reply = "Sorry, I can't help with that.";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(&server)
        .await;

    let (status, body) = post_generate(
        test_state(&server.uri(), "test-key"),
        json!({ "description": "User can log in" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "malformed_response");
    assert_eq!(body["raw"], reply);
}
