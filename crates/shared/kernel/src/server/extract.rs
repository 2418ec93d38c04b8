//! Extractors that report malformed requests as [`ApiError::Validation`].
//!
//! Rejections from axum's `Json` and `Query` become `422` with a `{"detail": ...}` body,
//! the same shape as every other error.

use super::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{StatusCode, header};
    use axum::routing::post;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Selector {
        id: String,
    }

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    async fn echo(
        ApiQuery(selector): ApiQuery<Selector>,
        ApiJson(payload): ApiJson<Payload>,
    ) -> String {
        format!("{}:{}", selector.id, payload.name)
    }

    async fn send(uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let app = Router::new().route("/echo", post(echo));
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn well_formed_request_passes_through() {
        let app = Router::new().route("/echo", post(echo));
        let request = Request::post("/echo?id=7")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "name": "Rachel" }).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"7:Rachel");
    }

    #[tokio::test]
    async fn missing_query_is_422_with_detail() {
        let (status, body) = send("/echo", "application/json", r#"{"name":"Rachel"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("id"), "{body}");
    }

    #[tokio::test]
    async fn missing_body_field_is_422_with_detail() {
        let (status, body) = send("/echo?id=7", "application/json", "{}").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("name"), "{body}");
    }

    #[tokio::test]
    async fn wrong_content_type_is_422_with_detail() {
        let (status, body) = send("/echo?id=7", "text/plain", r#"{"name":"Rachel"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string(), "{body}");
    }
}
