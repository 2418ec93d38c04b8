//! Policy feature slice: `GET /api/policy/{policy_number}`.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod models;
pub mod service;

pub use crate::error::{POLICY_NOT_FOUND, PolicyError, PolicyErrorExt};
use chub_kernel::directory::Directory;
use chub_kernel::domain::registry::InitializedSlice;

/// Policy feature state
#[chub_derive::chub_slice]
pub struct Policy {
    pub directory: Directory,
}

/// Initialize the policy feature.
///
/// # Errors
/// [`PolicyError::Config`] if the directory holds no identities.
pub fn init(directory: Directory) -> Result<InitializedSlice, PolicyError> {
    if directory.is_empty() {
        return Err(PolicyError::Config {
            message: "Directory holds no identities".into(),
            context: None,
        });
    }

    tracing::info!(policies = directory.len(), "Policy slice initialized");

    Ok(InitializedSlice::new(Policy::new(PolicyInner { directory })))
}

/// Routes of the policy slice.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<chub_kernel::server::state::ApiState> {
    utoipa_axum::router::OpenApiRouter::new().routes(utoipa_axum::routes!(handlers::policy_handler))
}
