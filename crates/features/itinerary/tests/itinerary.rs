use chrono::{Days, NaiveDate};
use chub_itinerary::{ItineraryError, USER_NOT_FOUND, init, service};
use chub_kernel::clock::FixedClock;
use chub_kernel::directory::{Directory, JourneyType};
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn resolves_passenger_and_segments() {
    let directory = Directory::seeded().unwrap();
    let itinerary = service::get_itinerary(&directory, "CSGHY622JK", date(2026, 10, 16)).unwrap();

    assert_eq!(itinerary.passenger_name, "Cheryl Chan");
    assert_eq!(itinerary.segments.len(), 2);
    assert_eq!(itinerary.segments[0].flight_number, "SQ178");
    assert_eq!(itinerary.segments[0].route, "SIN → SYD");
    assert_eq!(itinerary.segments[1].flight_number, "SQ179");
    assert_eq!(itinerary.segments[1].journey_type, JourneyType::Return);
}

#[test]
fn outward_is_today_and_return_three_days_later_for_any_day() {
    let directory = Directory::seeded().unwrap();
    let start = date(2024, 2, 25);

    for offset in 0..400 {
        let today = start.checked_add_days(Days::new(offset)).unwrap();
        let back = today.checked_add_days(Days::new(3)).unwrap();
        let itinerary = service::get_itinerary(&directory, "CSGHY654JK", today).unwrap();

        for segment in &itinerary.segments {
            let expected = match segment.journey_type {
                JourneyType::Outward => today,
                JourneyType::Return => back,
            };
            assert_eq!(segment.date, expected.format("%d %b %Y").to_string());
        }
    }
}

#[test]
fn unknown_passport_is_not_found() {
    let directory = Directory::seeded().unwrap();
    let err = service::get_itinerary(&directory, "UNKNOWN", date(2026, 1, 1)).unwrap_err();

    let ItineraryError::UserNotFound { message, .. } = err else {
        panic!("expected user not found, got {err:?}");
    };
    assert_eq!(message, USER_NOT_FOUND);
}

#[test]
fn init_creates_slice() {
    let clock = Arc::new(FixedClock(date(2026, 10, 16)));
    let slice = init(Directory::seeded().unwrap(), clock).unwrap();

    let itinerary = slice.downcast_ref::<chub_itinerary::Itinerary>().unwrap();
    assert_eq!(itinerary.directory.len(), 8);
}
