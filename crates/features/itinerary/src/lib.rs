//! Itinerary feature slice: `GET /api/itinerary/{passport_number}`.
//!
//! Flight dates are recomputed on every request from the injected [`Clock`], so
//! "today" and "+3 days" always track the calendar.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod models;
pub mod service;

pub use crate::error::{ItineraryError, ItineraryErrorExt, USER_NOT_FOUND};
use chub_kernel::clock::Clock;
use chub_kernel::directory::Directory;
use chub_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Itinerary feature state
#[chub_derive::chub_slice]
pub struct Itinerary {
    pub directory: Directory,
    pub clock: Arc<dyn Clock>,
}

/// Initialize the itinerary feature.
///
/// # Errors
/// [`ItineraryError::Config`] if the directory holds no identities.
pub fn init(
    directory: Directory,
    clock: Arc<dyn Clock>,
) -> Result<InitializedSlice, ItineraryError> {
    if directory.is_empty() {
        return Err(ItineraryError::Config {
            message: "Directory holds no identities".into(),
            context: None,
        });
    }

    tracing::info!(?clock, "Itinerary slice initialized");

    Ok(InitializedSlice::new(Itinerary::new(ItineraryInner { directory, clock })))
}

/// Routes of the itinerary slice.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<chub_kernel::server::state::ApiState> {
    utoipa_axum::router::OpenApiRouter::new()
        .routes(utoipa_axum::routes!(handlers::itinerary_handler))
}
