use crate::Policy;
use crate::models::PolicyResponse;
use crate::service;
use axum::Json;
use axum::extract::{Path, State};
use chub_derive::api_handler;
use chub_kernel::domain::constants::POLICY_TAG;
use chub_kernel::server::error::{ApiError, ErrorBody};
use chub_kernel::server::state::ApiState;

#[api_handler(
    get,
    path = "/api/policy/{policy_number}",
    params(("policy_number" = String, Path, description = "Policy number")),
    responses(
        (status = OK, description = "Policy details and coverage", body = PolicyResponse),
        (status = NOT_FOUND, description = "Policy not found", body = ErrorBody),
    ),
    tag = POLICY_TAG,
)]
pub(crate) async fn policy_handler(
    State(state): State<ApiState>,
    Path(policy_number): Path<String>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let slice = state.try_get_slice::<Policy>()?;
    Ok(Json(service::get_policy(&slice.directory, &policy_number)?))
}
