//! Claim identifier generation.
//!
//! Claim ids look like `CLM-TRV-2026-483920`: a fixed prefix and six digits.

use rand::Rng;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU32, Ordering};

pub const CLAIM_ID_PREFIX: &str = "CLM-TRV-2026";

const MIN_SERIAL: u32 = 100_000;
const MAX_SERIAL: u32 = 999_999;

/// Produces identifiers for newly filed claims.
pub trait ClaimIdGenerator: Debug + Send + Sync {
    fn next_id(&self) -> String;
}

/// Uniformly random six-digit serials. Ids may repeat; claims are never stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomClaimIds;

impl ClaimIdGenerator for RandomClaimIds {
    fn next_id(&self) -> String {
        format_claim_id(rand::rng().random_range(MIN_SERIAL..=MAX_SERIAL))
    }
}

/// Deterministic serials counting up from a start value, wrapping back to 100000.
#[derive(Debug)]
pub struct SequentialClaimIds {
    next: AtomicU32,
}

impl SequentialClaimIds {
    #[must_use]
    pub fn starting_at(serial: u32) -> Self {
        Self { next: AtomicU32::new(serial.clamp(MIN_SERIAL, MAX_SERIAL)) }
    }
}

impl Default for SequentialClaimIds {
    fn default() -> Self {
        Self::starting_at(MIN_SERIAL)
    }
}

impl ClaimIdGenerator for SequentialClaimIds {
    fn next_id(&self) -> String {
        let serial = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(if current >= MAX_SERIAL { MIN_SERIAL } else { current + 1 })
            })
            .unwrap_or(MIN_SERIAL);
        format_claim_id(serial)
    }
}

fn format_claim_id(serial: u32) -> String {
    format!("{CLAIM_ID_PREFIX}-{serial:06}")
}

/// Checks the `CLM-TRV-2026-NNNNNN` shape.
#[must_use]
pub fn is_claim_id(candidate: &str) -> bool {
    candidate
        .strip_prefix(CLAIM_ID_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|digits| digits.parse::<u32>().ok().filter(|_| digits.len() == 6))
        .is_some_and(|serial| (MIN_SERIAL..=MAX_SERIAL).contains(&serial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_well_formed() {
        let ids = RandomClaimIds;
        for _ in 0..200 {
            let id = ids.next_id();
            assert!(is_claim_id(&id), "malformed claim id: {id}");
        }
    }

    #[test]
    fn sequential_ids_count_up_and_wrap() {
        let ids = SequentialClaimIds::starting_at(999_998);
        assert_eq!(ids.next_id(), "CLM-TRV-2026-999998");
        assert_eq!(ids.next_id(), "CLM-TRV-2026-999999");
        assert_eq!(ids.next_id(), "CLM-TRV-2026-100000");
    }

    #[test]
    fn start_is_clamped_into_range() {
        assert_eq!(SequentialClaimIds::starting_at(7).next_id(), "CLM-TRV-2026-100000");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_claim_id("CLM-TRV-2026-12345"));
        assert!(!is_claim_id("CLM-TRV-2026-099999"));
        assert!(!is_claim_id("CLM-TRV-2025-123456"));
        assert!(!is_claim_id("CLM-TRV-2026-+12345"));
    }
}
