//! HTTP mapping of domain failures.
//!
//! Every failure leaves the server as `{"detail": "<message>"}` with a matching status.
//! Internal errors are logged and reported with a generic message.

use super::state::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chub_derive::api_model;
use std::borrow::Cow;
use tracing::error;

const INTERNAL_DETAIL: &str = "Internal server error";

#[chub_derive::chub_error]
pub enum ApiError {
    #[error("Unauthorized{}: {message}", format_context(.context))]
    Unauthorized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Invalid request{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Body of every error response.
#[api_model]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized { message: message.into(), context: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::Internal { message: err.to_string().into(), context: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Internal { .. } => {
                error!(error = %self, "Request failed");
                Cow::Borrowed(INTERNAL_DETAIL)
            },
            Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. } => message.clone(),
        };

        (self.status(), Json(ErrorBody { detail: detail.into_owned() })).into_response()
    }
}
