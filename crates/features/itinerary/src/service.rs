use crate::error::ItineraryError;
use crate::models::ItineraryResponse;
use chrono::NaiveDate;
use chub_kernel::directory::Directory;

/// Looks up a traveller and resolves their flight dates against `today`.
///
/// # Errors
/// [`ItineraryError::UserNotFound`] when the passport is unknown.
pub fn get_itinerary(
    directory: &Directory,
    passport_number: &str,
    today: NaiveDate,
) -> Result<ItineraryResponse, ItineraryError> {
    let identity =
        directory.find_by_passport(passport_number).ok_or_else(ItineraryError::user_not_found)?;

    Ok(ItineraryResponse {
        passenger_name: identity.name.clone(),
        segments: directory.segments(passport_number, today).unwrap_or_default(),
    })
}
