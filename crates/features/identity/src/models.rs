use chub_derive::api_model;
use chub_kernel::directory::IdentityRecord;

/// Credentials presented at login.
#[api_model(deny_unknown_fields = false)]
pub struct LoginRequest {
    pub passport_number: String,
    pub policy_number: String,
}

/// Successful login.
#[api_model]
pub struct LoginResponse {
    /// Always `true`; failures are reported as `401`.
    pub success: bool,
    pub user: IdentityRecord,
}
