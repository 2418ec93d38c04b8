use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::NaiveDate;
use chub::domain::config::{ApiConfig, DatabaseConfig};
use chub::kernel::clock::FixedClock;
use chub::kernel::directory::Directory;
use chub::kernel::ids::SequentialClaimIds;
use chub_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

async fn app_with(cfg: ApiConfig) -> Router {
    Server::builder()
        .config(cfg)
        .clock(FixedClock(today()))
        .claim_ids(SequentialClaimIds::default())
        .build()
        .await
        .unwrap()
        .router()
}

async fn app() -> Router {
    app_with(ApiConfig::default()).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn banner_is_served_with_and_without_trailing_slash() {
    for uri in ["/api/", "/api"] {
        let (status, body) = send(app().await, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "message": "Income Insurance Claims API v1.0" }));
    }
}

#[tokio::test]
async fn health_reports_disabled_store() {
    let response = app().await.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "disabled");
}

#[tokio::test]
async fn health_reports_connected_store() {
    let mut cfg = ApiConfig::default();
    cfg.database = Some(DatabaseConfig::default());

    let (status, body) = send(app_with(cfg).await, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn login_flow_for_rachel() {
    let (status, body) = send(
        app().await,
        post_json(
            "/api/login",
            &json!({ "passport_number": "CSGHY654JK", "policy_number": "TRV-2026-001487" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Rachel Ng");

    let (status, body) = send(
        app().await,
        post_json(
            "/api/login",
            &json!({ "passport_number": "CSGHY654JK", "policy_number": "WRONG" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "detail": "Invalid credentials" }));
}

#[tokio::test]
async fn itinerary_uses_injected_clock() {
    let (status, body) = send(app().await, get("/api/itinerary/CSGHY654JK")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passenger_name"], "Rachel Ng");
    let dates: Vec<_> =
        body["segments"].as_array().unwrap().iter().map(|s| s["date"].clone()).collect();
    assert_eq!(
        dates,
        vec![json!("16 Oct 2026"), json!("16 Oct 2026"), json!("19 Oct 2026"), json!("19 Oct 2026")]
    );

    let (status, body) = send(app().await, get("/api/itinerary/NOPE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn claim_ids_come_from_injected_generator() {
    let app = app().await;
    let uri = "/api/claim/baggage?passport_number=CSGHY623JK";

    let (_, first) = send(app.clone(), post_json(uri, &json!({ "flight_number": "SQ636" }))).await;
    let (_, second) =
        send(app, post_json(uri, &json!({ "flight_number": "SQ636", "delay_hours": 2 }))).await;

    assert_eq!(first["claim_id"], "CLM-TRV-2026-100000");
    assert_eq!(first["status"], "APPROVED");
    assert_eq!(second["claim_id"], "CLM-TRV-2026-100001");
    assert_eq!(second["status"], "PENDING_REVIEW");
}

#[tokio::test]
async fn policy_details_and_missing_policy() {
    let (status, body) = send(app().await, get("/api/policy/INC-TRV-2024-79245")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["policy_holder"], "Elizabeth Choy");
    assert_eq!(body["coverage"]["lost_documents"], json!({ "limit": 1000, "currency": "$" }));

    let (status, body) = send(app().await, get("/api/policy/UNKNOWN")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Policy not found" }));
}

#[tokio::test]
async fn request_ids_are_generated_and_echoed() {
    let response = app().await.oneshot(get("/api/")).await.unwrap();
    let generated = response.headers().get("x-request-id").unwrap();
    assert_eq!(generated.len(), 12);

    let request = Request::get("/api/policy/UNKNOWN")
        .header("x-request-id", "trace-me-42")
        .body(Body::empty())
        .unwrap();
    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me-42");
}

#[tokio::test]
async fn wildcard_cors_mirrors_origin_with_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/login")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "http://localhost:3000");
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn configured_origins_are_enforced() {
    let mut cfg = ApiConfig::default();
    cfg.cors.allowed_origins = vec!["https://claims.example".to_owned()];
    let app = app_with(cfg).await;

    let allowed = Request::get("/api/")
        .header(header::ORIGIN, "https://claims.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://claims.example"
    );

    let denied = Request::get("/api/")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(denied).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn api_reference_is_served() {
    let response = app().await.oneshot(get("/scalar")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("/api/claim/baggage"));
}

#[tokio::test]
async fn empty_directory_fails_to_build() {
    let result = Server::builder()
        .directory(Directory::builder().build().unwrap())
        .build()
        .await;

    assert!(result.is_err());
}
