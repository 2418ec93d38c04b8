#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chub_domain::config::ApiConfig;
use chub_kernel::directory::Directory;
use chub_kernel::server::state::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(chub_identity::init(Directory::seeded().unwrap()).unwrap())
        .build()
        .unwrap();
    let (router, _) = chub_identity::router().split_for_parts();
    router.with_state(state)
}

async fn login(body: Value) -> (StatusCode, Value) {
    let request = Request::post("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn accepts_matching_credentials() {
    let (status, body) =
        login(json!({ "passport_number": "CSGHY654JK", "policy_number": "TRV-2026-001487" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "user": {
                "name": "Rachel Ng",
                "passport_number": "CSGHY654JK",
                "policy_number": "TRV-2026-001487",
                "policy_type": "Income Travel Insurance - Premier Plan",
                "policy_status": "ACTIVE",
            }
        })
    );
}

#[tokio::test]
async fn rejects_wrong_policy_with_401() {
    let (status, body) =
        login(json!({ "passport_number": "CSGHY654JK", "policy_number": "WRONG" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "detail": "Invalid credentials" }));
}

#[tokio::test]
async fn rejects_unknown_passport_with_401() {
    let (status, body) =
        login(json!({ "passport_number": "NOPE", "policy_number": "TRV-2026-001487" })).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "detail": "Invalid credentials" }));
}

#[tokio::test]
async fn missing_fields_are_422_with_detail() {
    let (status, body) = login(json!({ "passport_number": "CSGHY654JK" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("policy_number"), "{detail}");
}
