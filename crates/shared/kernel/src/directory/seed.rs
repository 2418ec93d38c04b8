use super::{DateAnchor, Directory, DirectoryBuilder, DirectoryError, FlightPlan, IdentityRecord};
use chrono::NaiveDate;

const PREMIER: &str = "Income Travel Insurance - Premier Plan";
const BUSINESS: &str = "Income Travel Insurance - Business Plan";
const SINGAPORE_AIRLINES: &str = "Singapore Airlines";
const ANA: &str = "All Nippon Airways";
const BRITISH_AIRWAYS: &str = "British Airways";

const BROKER_OUTWARD: NaiveDate = date(2025, 12, 18);
const BROKER_RETURN: NaiveDate = date(2025, 12, 22);

/// Return flights depart this many days after the outward ones.
const TRIP_DAYS: u64 = 3;

/// Round trips out of Singapore on Singapore Airlines: outward today, back after the trip.
const ROUND_TRIPS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("CSGHY623JK", "Mei Ling Chen", "INC-TRV-2024-79045", "SQ636", "SQ637", "BKK"),
    ("CSGHY622JK", "Cheryl Chan", "INC-TRV-2024-79145", "SQ178", "SQ179", "SYD"),
    ("CSGHY664JK", "Elizabeth Choy", "INC-TRV-2024-79245", "SQ254", "SQ255", "HKG"),
    ("CSGHY224JK", "Kelly Pan", "INC-TRV-2024-78946", "SQ231", "SQ232", "CDG"),
    ("CSGHY304JK", "Sophia Poh", "INC-TRV-2024-79747", "SQ828", "SQ829", "NRT"),
    ("CSBNY384JK", "Emily Wong", "INC-TRV-2024-79048", "SQ322", "SQ321", "LHR"),
];

pub(super) fn directory() -> Result<Directory, DirectoryError> {
    let back = DateAnchor::DaysFromToday(TRIP_DAYS);

    let builder = Directory::builder()
        .entry(
            IdentityRecord::active("CSGHY654JK", "Rachel Ng", "TRV-2026-001487", PREMIER),
            [
                FlightPlan::outward("SQ882", "SIN", "HAK", SINGAPORE_AIRLINES, DateAnchor::Today),
                FlightPlan::outward("NH886", "HAK", "NRT", ANA, DateAnchor::Today),
                FlightPlan::returning("NH885", "NRT", "HAK", ANA, back),
                FlightPlan::returning("SQ883", "HAK", "SIN", SINGAPORE_AIRLINES, back),
            ],
        )
        .entry(
            IdentityRecord::active("CSGHY456JK", "Broker Account", "TRV-2026-001687", BUSINESS),
            [
                FlightPlan::outward(
                    "SQ318",
                    "SIN",
                    "LHR",
                    SINGAPORE_AIRLINES,
                    DateAnchor::Fixed(BROKER_OUTWARD),
                ),
                FlightPlan::returning(
                    "BA15",
                    "LHR",
                    "SIN",
                    BRITISH_AIRWAYS,
                    DateAnchor::Fixed(BROKER_RETURN),
                ),
            ],
        );

    let builder = ROUND_TRIPS.iter().fold(
        builder,
        |builder: DirectoryBuilder, &(passport, name, policy, out, home, destination)| {
            builder.entry(
                IdentityRecord::active(passport, name, policy, PREMIER),
                [
                    FlightPlan::outward(
                        out,
                        "SIN",
                        destination,
                        SINGAPORE_AIRLINES,
                        DateAnchor::Today,
                    ),
                    FlightPlan::returning(home, destination, "SIN", SINGAPORE_AIRLINES, back),
                ],
            )
        },
    );

    builder.build()
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}
