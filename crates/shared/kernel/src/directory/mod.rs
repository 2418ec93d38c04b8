//! Read-only directory of insured travellers and their flight plans.
//!
//! Every slice answers requests by looking up this directory. It is built once at startup
//! (normally from [`Directory::seeded`]) and shared behind an `Arc`; nothing mutates it.
//!
//! Flight dates are stored as [`DateAnchor`]s and resolved against the caller's "today",
//! so the same directory serves any date.

mod error;
mod seed;

use chrono::{Days, NaiveDate};
use chub_derive::api_model;
use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use error::{DirectoryError, DirectoryErrorExt};

/// Display format of flight dates, e.g. `16 Oct 2026`.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Status stored on every seeded policy.
pub const ACTIVE_STATUS: &str = "ACTIVE";

/// A traveller and the policy that covers them.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub name: String,
    pub passport_number: String,
    pub policy_number: String,
    pub policy_type: String,
    pub policy_status: String,
}

impl IdentityRecord {
    /// A record with an `ACTIVE` policy.
    pub fn active(
        passport_number: impl Into<String>,
        name: impl Into<String>,
        policy_number: impl Into<String>,
        policy_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passport_number: passport_number.into(),
            policy_number: policy_number.into(),
            policy_type: policy_type.into(),
            policy_status: ACTIVE_STATUS.to_owned(),
        }
    }
}

/// Direction of a flight relative to the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum JourneyType {
    Outward,
    Return,
}

/// When a flight departs, relative to the request date or fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAnchor {
    Today,
    DaysFromToday(u64),
    Fixed(NaiveDate),
}

impl DateAnchor {
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            // Only overflows past year 262143.
            Self::DaysFromToday(days) => today.checked_add_days(Days::new(days)).unwrap_or(today),
            Self::Fixed(date) => date,
        }
    }
}

/// Stored flight of a traveller's itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPlan {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub airline: String,
    pub journey_type: JourneyType,
    pub departs: DateAnchor,
}

impl FlightPlan {
    pub fn outward(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        departs: DateAnchor,
    ) -> Self {
        Self::new(flight_number, origin, destination, airline, JourneyType::Outward, departs)
    }

    pub fn returning(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        departs: DateAnchor,
    ) -> Self {
        Self::new(flight_number, origin, destination, airline, JourneyType::Return, departs)
    }

    fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        journey_type: JourneyType,
        departs: DateAnchor,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            airline: airline.into(),
            journey_type,
            departs,
        }
    }

    /// `"SIN → HAK"`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    /// Resolves the departure date and renders the wire shape.
    #[must_use]
    pub fn segment(&self, today: NaiveDate) -> FlightSegment {
        FlightSegment {
            flight_number: self.flight_number.clone(),
            route: self.route(),
            date: self.departs.resolve(today).format(DATE_FORMAT).to_string(),
            airline: self.airline.clone(),
            journey_type: self.journey_type,
        }
    }
}

/// One flight as returned by the itinerary endpoint.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct FlightSegment {
    pub flight_number: String,
    pub route: String,
    /// Departure date, `DD Mon YYYY`.
    pub date: String,
    pub airline: String,
    pub journey_type: JourneyType,
}

#[derive(Debug)]
struct Entry {
    identity: IdentityRecord,
    flights: Vec<FlightPlan>,
}

#[derive(Debug)]
struct DirectoryInner {
    entries: Vec<Entry>,
    by_passport: FxHashMap<String, usize>,
}

/// Cheaply cloneable handle to the traveller directory.
#[derive(Debug, Clone)]
pub struct Directory {
    inner: Arc<DirectoryInner>,
}

impl Directory {
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::default()
    }

    /// The eight demo travellers served by the API.
    ///
    /// # Errors
    /// Only if the built-in table violates the uniqueness invariants.
    pub fn seeded() -> Result<Self, DirectoryError> {
        seed::directory()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Records in insertion order.
    pub fn identities(&self) -> impl Iterator<Item = &IdentityRecord> {
        self.inner.entries.iter().map(|entry| &entry.identity)
    }

    /// Exact, case-sensitive passport lookup.
    #[must_use]
    pub fn find_by_passport(&self, passport_number: &str) -> Option<&IdentityRecord> {
        self.entry(passport_number).map(|entry| &entry.identity)
    }

    /// Exact, case-sensitive policy lookup.
    #[must_use]
    pub fn find_by_policy(&self, policy_number: &str) -> Option<&IdentityRecord> {
        self.identities().find(|identity| identity.policy_number == policy_number)
    }

    /// Stored flights of a traveller, `None` for unknown passports.
    #[must_use]
    pub fn flights(&self, passport_number: &str) -> Option<&[FlightPlan]> {
        self.entry(passport_number).map(|entry| entry.flights.as_slice())
    }

    /// Flights of a traveller with dates resolved against `today`, in stored order.
    #[must_use]
    pub fn segments(&self, passport_number: &str, today: NaiveDate) -> Option<Vec<FlightSegment>> {
        self.flights(passport_number)
            .map(|flights| flights.iter().map(|flight| flight.segment(today)).collect())
    }

    fn entry(&self, passport_number: &str) -> Option<&Entry> {
        self.inner.by_passport.get(passport_number).and_then(|&index| self.inner.entries.get(index))
    }
}

/// Collects directory entries and validates uniqueness on [`DirectoryBuilder::build`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    entries: Vec<Entry>,
}

impl DirectoryBuilder {
    /// Adds a traveller with their flights in display order.
    pub fn entry(
        mut self,
        identity: IdentityRecord,
        flights: impl IntoIterator<Item = FlightPlan>,
    ) -> Self {
        self.entries.push(Entry { identity, flights: flights.into_iter().collect() });
        self
    }

    /// # Errors
    /// * [`DirectoryError::DuplicatePassport`] if two entries share a passport number.
    /// * [`DirectoryError::DuplicatePolicy`] if two entries share a policy number.
    pub fn build(self) -> Result<Directory, DirectoryError> {
        let mut by_passport = FxHashMap::default();
        let mut policies = FxHashSet::default();

        for (index, entry) in self.entries.iter().enumerate() {
            let identity = &entry.identity;
            if by_passport.insert(identity.passport_number.clone(), index).is_some() {
                return Err(DirectoryError::DuplicatePassport {
                    message: identity.passport_number.clone().into(),
                    context: None,
                });
            }
            if !policies.insert(identity.policy_number.clone()) {
                return Err(DirectoryError::DuplicatePolicy {
                    message: identity.policy_number.clone().into(),
                    context: None,
                });
            }
        }

        Ok(Directory { inner: Arc::new(DirectoryInner { entries: self.entries, by_passport }) })
    }
}
