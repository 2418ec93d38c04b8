use crate::error::ClaimsError;
use crate::models::{BaggageClaimRequest, ClaimResponse, ClaimStatus};
use chub_kernel::directory::Directory;
use chub_kernel::domain::constants::CURRENCY;
use chub_kernel::ids::ClaimIdGenerator;

/// Flat payout for baggage delayed at least [`QUALIFYING_DELAY_HOURS`].
pub const BAGGAGE_DELAY_COMPENSATION: f64 = 150.0;
pub const QUALIFYING_DELAY_HOURS: i64 = 6;

/// `150.00` for delays of six hours or more, otherwise nothing.
#[must_use]
pub const fn compensation_for(delay_hours: Option<i64>) -> f64 {
    match delay_hours {
        Some(hours) if hours >= QUALIFYING_DELAY_HOURS => BAGGAGE_DELAY_COMPENSATION,
        _ => 0.0,
    }
}

/// Files a baggage delay claim for a known traveller.
///
/// # Errors
/// [`ClaimsError::UserNotFound`] when the passport is unknown.
pub fn file_claim(
    directory: &Directory,
    claim_ids: &dyn ClaimIdGenerator,
    passport_number: &str,
    request: &BaggageClaimRequest,
) -> Result<ClaimResponse, ClaimsError> {
    directory.find_by_passport(passport_number).ok_or_else(ClaimsError::user_not_found)?;

    let compensation_amount = compensation_for(request.delay_hours);
    let status =
        if compensation_amount > 0.0 { ClaimStatus::Approved } else { ClaimStatus::PendingReview };

    Ok(ClaimResponse {
        claim_id: claim_ids.next_id(),
        status,
        message: format!(
            "Your baggage delay claim for flight {} has been processed.",
            request.flight_number
        ),
        compensation_amount,
        currency: CURRENCY.to_owned(),
    })
}
