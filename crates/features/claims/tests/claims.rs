use chub_claims::models::{BaggageClaimRequest, ClaimStatus};
use chub_claims::service::{self, compensation_for};
use chub_claims::{ClaimsError, USER_NOT_FOUND, init};
use chub_kernel::directory::Directory;
use chub_kernel::ids::{SequentialClaimIds, is_claim_id};
use serde_json::json;
use std::sync::Arc;

fn request(body: serde_json::Value) -> BaggageClaimRequest {
    serde_json::from_value(body).unwrap()
}

#[test]
fn six_hours_or_more_is_compensated() {
    assert!((compensation_for(Some(6)) - 150.0).abs() < f64::EPSILON);
    assert!((compensation_for(Some(48)) - 150.0).abs() < f64::EPSILON);
    assert!(compensation_for(Some(5)).abs() < f64::EPSILON);
    assert!(compensation_for(Some(0)).abs() < f64::EPSILON);
    assert!(compensation_for(Some(-3)).abs() < f64::EPSILON);
    assert!(compensation_for(None).abs() < f64::EPSILON);
}

#[test]
fn qualifying_delay_is_approved() {
    let directory = Directory::seeded().unwrap();
    let ids = SequentialClaimIds::default();

    let claim = service::file_claim(
        &directory,
        &ids,
        "CSGHY654JK",
        &request(json!({ "flight_number": "SQ882", "delay_hours": 6 })),
    )
    .unwrap();

    assert_eq!(claim.claim_id, "CLM-TRV-2026-100000");
    assert_eq!(claim.status, ClaimStatus::Approved);
    assert!((claim.compensation_amount - 150.0).abs() < f64::EPSILON);
    assert_eq!(claim.currency, "$");
    assert_eq!(claim.message, "Your baggage delay claim for flight SQ882 has been processed.");
}

#[test]
fn short_delay_is_pending_review() {
    let directory = Directory::seeded().unwrap();
    let claim = service::file_claim(
        &directory,
        &SequentialClaimIds::default(),
        "CSGHY654JK",
        &request(json!({ "flight_number": "SQ882", "delay_hours": 5 })),
    )
    .unwrap();

    assert_eq!(claim.status, ClaimStatus::PendingReview);
    assert!(claim.compensation_amount.abs() < f64::EPSILON);
}

#[test]
fn omitted_delay_defaults_to_six_hours() {
    let body = request(json!({ "flight_number": "SQ882" }));
    assert_eq!(body.delay_hours, Some(6));
    assert_eq!(body.description, None);

    let directory = Directory::seeded().unwrap();
    let claim =
        service::file_claim(&directory, &SequentialClaimIds::default(), "CSGHY654JK", &body)
            .unwrap();
    assert_eq!(claim.status, ClaimStatus::Approved);
}

#[test]
fn null_delay_is_not_compensated() {
    let body = request(json!({ "flight_number": "SQ882", "delay_hours": null }));
    assert_eq!(body.delay_hours, None);

    let directory = Directory::seeded().unwrap();
    let claim =
        service::file_claim(&directory, &SequentialClaimIds::default(), "CSGHY654JK", &body)
            .unwrap();
    assert_eq!(claim.status, ClaimStatus::PendingReview);
}

#[test]
fn whole_number_delays_are_accepted_in_any_numeric_form() {
    for delay in [json!(6), json!(6.0), json!("6"), json!(" 6 ")] {
        let body = request(json!({ "flight_number": "SQ882", "delay_hours": delay }));
        assert_eq!(body.delay_hours, Some(6), "{delay}");
    }

    let directory = Directory::seeded().unwrap();
    let body = request(json!({ "flight_number": "SQ882", "delay_hours": 6.0 }));
    let claim =
        service::file_claim(&directory, &SequentialClaimIds::default(), "CSGHY654JK", &body)
            .unwrap();
    assert_eq!(claim.status, ClaimStatus::Approved);
}

#[test]
fn fractional_or_non_numeric_delays_are_rejected() {
    for delay in [json!(6.5), json!("6.5"), json!("six"), json!(true), json!([6])] {
        let parsed = serde_json::from_value::<BaggageClaimRequest>(
            json!({ "flight_number": "SQ882", "delay_hours": delay }),
        );
        assert!(parsed.is_err(), "{delay} should be rejected");
    }
}

#[test]
fn ids_come_from_the_generator() {
    let directory = Directory::seeded().unwrap();
    let ids = SequentialClaimIds::starting_at(424_242);
    let body = request(json!({ "flight_number": "SQ636", "description": "Suitcase missing" }));

    let first = service::file_claim(&directory, &ids, "CSGHY623JK", &body).unwrap();
    let second = service::file_claim(&directory, &ids, "CSGHY623JK", &body).unwrap();

    assert_eq!(first.claim_id, "CLM-TRV-2026-424242");
    assert_eq!(second.claim_id, "CLM-TRV-2026-424243");
    assert!(is_claim_id(&first.claim_id));
}

#[test]
fn unknown_claimant_is_not_found() {
    let directory = Directory::seeded().unwrap();
    let err = service::file_claim(
        &directory,
        &SequentialClaimIds::default(),
        "UNKNOWN",
        &request(json!({ "flight_number": "SQ882" })),
    )
    .unwrap_err();

    let ClaimsError::UserNotFound { message, .. } = err else {
        panic!("expected user not found, got {err:?}");
    };
    assert_eq!(message, USER_NOT_FOUND);
}

#[test]
fn status_serializes_in_upper_case() {
    assert_eq!(serde_json::to_value(ClaimStatus::Approved).unwrap(), json!("APPROVED"));
    assert_eq!(serde_json::to_value(ClaimStatus::PendingReview).unwrap(), json!("PENDING_REVIEW"));
}

#[test]
fn init_creates_slice() {
    let slice =
        init(Directory::seeded().unwrap(), Arc::new(SequentialClaimIds::default())).unwrap();
    assert!(slice.downcast_ref::<chub_claims::Claims>().is_some());
}
