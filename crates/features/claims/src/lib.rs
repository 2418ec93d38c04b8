//! Claims feature slice: `POST /api/claim/baggage?passport_number=...`.
//!
//! Claims are decided on the spot by a fixed rule and returned, never persisted.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod models;
pub mod service;

pub use crate::error::{ClaimsError, ClaimsErrorExt, USER_NOT_FOUND};
use chub_kernel::directory::Directory;
use chub_kernel::domain::registry::InitializedSlice;
use chub_kernel::ids::ClaimIdGenerator;
use std::sync::Arc;

/// Claims feature state
#[chub_derive::chub_slice]
pub struct Claims {
    pub directory: Directory,
    pub claim_ids: Arc<dyn ClaimIdGenerator>,
}

/// Initialize the claims feature.
///
/// # Errors
/// [`ClaimsError::Config`] if the directory holds no identities.
pub fn init(
    directory: Directory,
    claim_ids: Arc<dyn ClaimIdGenerator>,
) -> Result<InitializedSlice, ClaimsError> {
    if directory.is_empty() {
        return Err(ClaimsError::Config {
            message: "Directory holds no identities".into(),
            context: None,
        });
    }

    tracing::info!(?claim_ids, "Claims slice initialized");

    Ok(InitializedSlice::new(Claims::new(ClaimsInner { directory, claim_ids })))
}

/// Routes of the claims slice.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<chub_kernel::server::state::ApiState> {
    utoipa_axum::router::OpenApiRouter::new()
        .routes(utoipa_axum::routes!(handlers::baggage_claim_handler))
}
