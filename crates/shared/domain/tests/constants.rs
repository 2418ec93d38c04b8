use chub_domain::constants::{API_BANNER, API_PREFIX, CURRENCY};

#[test]
fn constants_match_wire_contract() {
    assert_eq!(API_PREFIX, "/api");
    assert_eq!(API_BANNER, "Income Insurance Claims API v1.0");
    assert_eq!(CURRENCY, "$");
}
