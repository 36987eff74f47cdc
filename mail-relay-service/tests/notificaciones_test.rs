mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::{test_state, TestApp, SENDER};
use mail_relay_service::services::{MockEmailProvider, ProviderError};
use mail_relay_service::startup::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn router(provider: Arc<MockEmailProvider>) -> Router {
    build_router(test_state(provider))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notificaciones")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Successful relay
// =============================================================================

#[tokio::test]
async fn valid_notification_is_acknowledged() {
    let provider = Arc::new(MockEmailProvider::new());

    let response = router(provider.clone())
        .oneshot(post_json(
            json!({ "email": "ana@example.com", "mensaje": "Tu cita es mañana" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn relayed_email_uses_fixed_subject_and_configured_sender() {
    let provider = Arc::new(MockEmailProvider::new());

    router(provider.clone())
        .oneshot(post_json(
            json!({ "email": "ana@example.com", "mensaje": "Tu cita es mañana" }).to_string(),
        ))
        .await
        .unwrap();

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, SENDER);
    assert_eq!(sent[0].to, "ana@example.com");
    assert_eq!(sent[0].subject, "Notificación");
    assert_eq!(sent[0].body, "Tu cita es mañana");
}

#[tokio::test]
async fn extra_fields_are_ignored() {
    let provider = Arc::new(MockEmailProvider::new());

    let response = router(provider.clone())
        .oneshot(post_json(
            json!({ "email": "ana@example.com", "mensaje": "hola", "canal": "sms" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.sent().len(), 1);
}

// =============================================================================
// Failures are opaque server errors
// =============================================================================

#[tokio::test]
async fn missing_fields_cause_server_error() {
    for payload in [
        json!({ "email": "ana@example.com" }),
        json!({ "mensaje": "hola" }),
        json!({}),
    ] {
        let provider = Arc::new(MockEmailProvider::new());

        let response = router(provider.clone())
            .oneshot(post_json(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error" })
        );
        assert!(provider.sent().is_empty());
    }
}

#[tokio::test]
async fn malformed_json_causes_server_error() {
    let provider = Arc::new(MockEmailProvider::new());

    let response = router(provider.clone())
        .oneshot(post_json(r#"{"email": "ana@example.com", "mensaje": "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn smtp_failure_causes_opaque_server_error() {
    let provider = Arc::new(MockEmailProvider::failing(ProviderError::SendFailed(
        "535 authentication failed".to_string(),
    )));

    let response = router(provider)
        .oneshot(post_json(
            json!({ "email": "ana@example.com", "mensaje": "hola" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn unparsable_recipient_causes_server_error() {
    let provider = Arc::new(MockEmailProvider::new());

    let response = router(provider.clone())
        .oneshot(post_json(
            json!({ "email": "not an address", "mensaje": "hola" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn get_is_not_routed() {
    let provider = Arc::new(MockEmailProvider::new());

    let response = router(provider)
        .oneshot(
            Request::builder()
                .uri("/notificaciones")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Over the wire
// =============================================================================

#[tokio::test]
async fn notification_over_http_is_relayed() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/notificaciones", app.address))
        .header("x-request-id", "relay-test-1")
        .json(&json!({ "email": "ana@example.com", "mensaje": "hola" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "relay-test-1");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "ok" }));
    assert_eq!(app.provider.sent().len(), 1);
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let app = TestApp::spawn().await;

    let response = reqwest::get(format!("{}/metrics", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
