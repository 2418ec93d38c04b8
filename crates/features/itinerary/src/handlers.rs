use crate::Itinerary;
use crate::models::ItineraryResponse;
use crate::service;
use axum::Json;
use axum::extract::{Path, State};
use chub_derive::api_handler;
use chub_kernel::domain::constants::ITINERARY_TAG;
use chub_kernel::server::error::{ApiError, ErrorBody};
use chub_kernel::server::state::ApiState;
use tracing::debug;

#[api_handler(
    get,
    path = "/api/itinerary/{passport_number}",
    params(("passport_number" = String, Path, description = "Passport number of the traveller")),
    responses(
        (status = OK, description = "Flight segments of the traveller", body = ItineraryResponse),
        (status = NOT_FOUND, description = "User not found", body = ErrorBody),
    ),
    tag = ITINERARY_TAG,
)]
pub(crate) async fn itinerary_handler(
    State(state): State<ApiState>,
    Path(passport_number): Path<String>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    let slice = state.try_get_slice::<Itinerary>()?;
    let today = slice.clock.today();

    let itinerary = service::get_itinerary(&slice.directory, &passport_number, today)?;
    debug!(
        passport = %passport_number,
        %today,
        segments = itinerary.segments.len(),
        "Itinerary resolved"
    );

    Ok(Json(itinerary))
}
