//! Identity feature slice: `POST /api/login` checks a passport/policy pair against the
//! traveller directory.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod models;
pub mod service;

pub use crate::error::{INVALID_CREDENTIALS, IdentityError, IdentityErrorExt};
use chub_kernel::directory::Directory;
use chub_kernel::domain::registry::InitializedSlice;

/// Identity feature state
#[chub_derive::chub_slice]
pub struct Identity {
    pub directory: Directory,
}

/// Initialize the identity feature.
///
/// # Errors
/// [`IdentityError::Config`] if the directory holds no identities.
pub fn init(directory: Directory) -> Result<InitializedSlice, IdentityError> {
    if directory.is_empty() {
        return Err(IdentityError::Config {
            message: "Directory holds no identities".into(),
            context: None,
        });
    }

    tracing::info!(identities = directory.len(), "Identity slice initialized");

    Ok(InitializedSlice::new(Identity::new(IdentityInner { directory })))
}

/// Routes of the identity slice.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<chub_kernel::server::state::ApiState> {
    utoipa_axum::router::OpenApiRouter::new()
        .routes(utoipa_axum::routes!(handlers::login_handler))
}
