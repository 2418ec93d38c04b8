use crate::Claims;
use crate::models::{BaggageClaimRequest, ClaimQuery, ClaimResponse};
use crate::service;
use axum::Json;
use axum::extract::State;
use chub_derive::api_handler;
use chub_kernel::domain::constants::CLAIMS_TAG;
use chub_kernel::server::error::{ApiError, ErrorBody};
use chub_kernel::server::extract::{ApiJson, ApiQuery};
use chub_kernel::server::state::ApiState;
use tracing::info;

#[api_handler(
    post,
    path = "/api/claim/baggage",
    params(ClaimQuery),
    request_body = BaggageClaimRequest,
    responses(
        (status = OK, description = "Claim processed", body = ClaimResponse),
        (status = NOT_FOUND, description = "User not found", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed request", body = ErrorBody),
    ),
    tag = CLAIMS_TAG,
)]
pub(crate) async fn baggage_claim_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<ClaimQuery>,
    ApiJson(request): ApiJson<BaggageClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let slice = state.try_get_slice::<Claims>()?;

    let claim = service::file_claim(
        &slice.directory,
        slice.claim_ids.as_ref(),
        &query.passport_number,
        &request,
    )?;

    info!(
        claim_id = %claim.claim_id,
        passport = %query.passport_number,
        flight = %request.flight_number,
        delay_hours = ?request.delay_hours,
        status = ?claim.status,
        "Baggage claim filed"
    );

    Ok(Json(claim))
}
