use crate::error::PolicyError;
use crate::models::{Coverage, PolicyResponse};
use chub_kernel::directory::Directory;

/// Finds the policy and attaches the standard coverage schedule.
///
/// # Errors
/// [`PolicyError::NotFound`] when no traveller holds `policy_number`.
pub fn get_policy(
    directory: &Directory,
    policy_number: &str,
) -> Result<PolicyResponse, PolicyError> {
    let holder = directory.find_by_policy(policy_number).ok_or_else(PolicyError::not_found)?;

    Ok(PolicyResponse {
        policy_number: holder.policy_number.clone(),
        policy_holder: holder.name.clone(),
        policy_type: holder.policy_type.clone(),
        status: holder.policy_status.clone(),
        coverage: Coverage::standard(),
    })
}
