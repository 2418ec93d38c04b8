use chub_kernel::directory::Directory;
use chub_policy::models::Coverage;
use chub_policy::{POLICY_NOT_FOUND, PolicyError, init, service};

#[test]
fn returns_holder_and_coverage() {
    let directory = Directory::seeded().unwrap();
    let policy = service::get_policy(&directory, "INC-TRV-2024-79048").unwrap();

    assert_eq!(policy.policy_number, "INC-TRV-2024-79048");
    assert_eq!(policy.policy_holder, "Emily Wong");
    assert_eq!(policy.policy_type, "Income Travel Insurance - Premier Plan");
    assert_eq!(policy.status, "ACTIVE");
}

#[test]
fn coverage_is_identical_for_every_policy() {
    let directory = Directory::seeded().unwrap();

    for identity in directory.identities() {
        let policy = service::get_policy(&directory, &identity.policy_number).unwrap();
        assert_eq!(policy.coverage, Coverage::standard());
        assert_eq!(policy.policy_holder, identity.name);
    }

    let coverage = Coverage::standard();
    assert_eq!(coverage.baggage_delay.limit, 500);
    assert_eq!(coverage.lost_documents.limit, 1000);
    assert_eq!(coverage.medical_expense.limit, 500_000);
    assert_eq!(coverage.medical_expense.currency, "$");
}

#[test]
fn passport_is_not_a_policy_number() {
    let directory = Directory::seeded().unwrap();
    let err = service::get_policy(&directory, "CSGHY654JK").unwrap_err();

    let PolicyError::NotFound { message, .. } = err else {
        panic!("expected not found, got {err:?}");
    };
    assert_eq!(message, POLICY_NOT_FOUND);
}

#[test]
fn init_creates_slice() {
    let slice = init(Directory::seeded().unwrap()).unwrap();
    assert!(slice.downcast_ref::<chub_policy::Policy>().is_some());
}
