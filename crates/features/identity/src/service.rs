use crate::error::IdentityError;
use chub_kernel::directory::{Directory, IdentityRecord};

/// Matches a passport/policy pair against the directory.
///
/// # Errors
/// [`IdentityError::InvalidCredentials`] when the passport is unknown or the policy
/// number differs from the stored one. Both cases are indistinguishable.
pub fn login<'a>(
    directory: &'a Directory,
    passport_number: &str,
    policy_number: &str,
) -> Result<&'a IdentityRecord, IdentityError> {
    directory
        .find_by_passport(passport_number)
        .filter(|identity| identity.policy_number == policy_number)
        .ok_or_else(IdentityError::invalid_credentials)
}
