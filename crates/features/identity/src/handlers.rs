use crate::Identity;
use crate::models::{LoginRequest, LoginResponse};
use crate::service;
use axum::Json;
use axum::extract::State;
use chub_derive::api_handler;
use chub_kernel::domain::constants::IDENTITY_TAG;
use chub_kernel::server::error::{ApiError, ErrorBody};
use chub_kernel::server::extract::ApiJson;
use chub_kernel::server::state::ApiState;
use tracing::{info, warn};

#[api_handler(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Credentials accepted", body = LoginResponse),
        (status = UNAUTHORIZED, description = "Invalid credentials", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed request", body = ErrorBody),
    ),
    tag = IDENTITY_TAG,
)]
pub(crate) async fn login_handler(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let slice = state.try_get_slice::<Identity>()?;

    match service::login(&slice.directory, &request.passport_number, &request.policy_number) {
        Ok(user) => {
            info!(passport = %user.passport_number, "Login accepted");
            Ok(Json(LoginResponse { success: true, user: user.clone() }))
        },
        Err(err) => {
            warn!(passport = %request.passport_number, "Login rejected");
            Err(err.into())
        },
    }
}
