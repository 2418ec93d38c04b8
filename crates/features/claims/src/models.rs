use chub_derive::api_model;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delay assumed when the request leaves `delay_hours` out.
pub const DEFAULT_DELAY_HOURS: i64 = 6;

#[allow(clippy::unnecessary_wraps)]
const fn default_delay_hours() -> Option<i64> {
    Some(DEFAULT_DELAY_HOURS)
}

/// Accepts `null`, integers, whole-number floats (`6.0`) and integer strings (`"6"`).
fn lenient_delay_hours<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DelayHoursVisitor;

    impl<'de> Visitor<'de> for DelayHoursVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a whole number of hours or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            i64::try_from(value)
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        #[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            let whole = value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64;
            if whole {
                Ok(Some(value as i64))
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(DelayHoursVisitor)
}

/// Claimant selector, passed as a query parameter.
#[api_model(deny_unknown_fields = false)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct ClaimQuery {
    pub passport_number: String,
}

/// Baggage delay claim.
#[api_model(deny_unknown_fields = false)]
pub struct BaggageClaimRequest {
    pub flight_number: String,
    /// Hours the baggage was delayed. Omitted means 6; `null` means no delay.
    #[serde(default = "default_delay_hours", deserialize_with = "lenient_delay_hours")]
    pub delay_hours: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of a filed claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Approved,
    PendingReview,
}

/// Generated claim; never stored.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct ClaimResponse {
    pub claim_id: String,
    pub status: ClaimStatus,
    pub message: String,
    pub compensation_amount: f64,
    pub currency: String,
}
