use chub_derive::api_model;
use chub_kernel::directory::FlightSegment;

/// A traveller's flights with dates resolved for the request day.
#[api_model]
pub struct ItineraryResponse {
    pub passenger_name: String,
    pub segments: Vec<FlightSegment>,
}
