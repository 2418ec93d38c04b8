//! Facade crate for `ClaimsHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `chub` with the `server` feature to get the slice routers.
//! - Build [`Capabilities`] and call [`init`] to obtain the feature slices for the state registry.

pub use chub_domain as domain;
pub use chub_kernel as kernel;
use chub_kernel::clock::{Clock, SystemClock};
use chub_kernel::directory::{Directory, DirectoryError};
use chub_kernel::ids::{ClaimIdGenerator, RandomClaimIds};
use domain::registry::InitializedSlice;
use std::borrow::Cow;
use std::sync::Arc;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use chub_kernel::server::state::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        pub use chub_kernel::server::router::system_router;

        /// System routes merged with the routes of every feature slice.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router()
                .merge(crate::features::identity::router())
                .merge(crate::features::itinerary::router())
                .merge(crate::features::claims::router())
                .merge(crate::features::policy::router())
        }
    }
}

pub mod features {
    pub use chub_claims as claims;
    pub use chub_identity as identity;
    pub use chub_itinerary as itinerary;
    pub use chub_policy as policy;
}

#[chub_derive::chub_error]
pub enum InitError {
    #[error("Directory error{}: {source}", format_context(.context))]
    Directory { source: DirectoryError, context: Option<Cow<'static, str>> },
    #[error("Identity init failed{}: {source}", format_context(.context))]
    Identity { source: features::identity::IdentityError, context: Option<Cow<'static, str>> },
    #[error("Itinerary init failed{}: {source}", format_context(.context))]
    Itinerary { source: features::itinerary::ItineraryError, context: Option<Cow<'static, str>> },
    #[error("Claims init failed{}: {source}", format_context(.context))]
    Claims { source: features::claims::ClaimsError, context: Option<Cow<'static, str>> },
    #[error("Policy init failed{}: {source}", format_context(.context))]
    Policy { source: features::policy::PolicyError, context: Option<Cow<'static, str>> },
}

/// Injected collaborators shared by the feature slices.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub directory: Directory,
    pub clock: Arc<dyn Clock>,
    pub claim_ids: Arc<dyn ClaimIdGenerator>,
}

impl Capabilities {
    /// Seeded directory, the system clock and random claim ids.
    ///
    /// # Errors
    /// Returns an error if the seeded directory fails validation.
    pub fn production() -> Result<Self, InitError> {
        Ok(Self {
            directory: Directory::seeded()?,
            clock: Arc::new(SystemClock),
            claim_ids: Arc::new(RandomClaimIds),
        })
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(capabilities: &Capabilities) -> Result<Vec<InitializedSlice>, InitError> {
    let Capabilities { directory, clock, claim_ids } = capabilities;

    Ok(vec![
        features::identity::init(directory.clone())?,
        features::itinerary::init(directory.clone(), Arc::clone(clock))?,
        features::claims::init(directory.clone(), Arc::clone(claim_ids))?,
        features::policy::init(directory.clone())?,
    ])
}
