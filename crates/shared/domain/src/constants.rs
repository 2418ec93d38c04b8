//! Route prefixes, `OpenAPI` tags and fixed response strings.

/// Common prefix of every claims endpoint.
pub const API_PREFIX: &str = "/api";

/// Greeting returned by `GET /api/`.
pub const API_BANNER: &str = "Income Insurance Claims API v1.0";

pub const SYSTEM_TAG: &str = "System";
pub const IDENTITY_TAG: &str = "Identity";
pub const ITINERARY_TAG: &str = "Itinerary";
pub const CLAIMS_TAG: &str = "Claims";
pub const POLICY_TAG: &str = "Policy";

/// Currency symbol used for compensation amounts and coverage limits.
pub const CURRENCY: &str = "$";
