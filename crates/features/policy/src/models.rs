use chub_derive::api_model;
use chub_kernel::domain::constants::CURRENCY;

pub const BAGGAGE_DELAY_LIMIT: u32 = 500;
pub const LOST_DOCUMENTS_LIMIT: u32 = 1_000;
pub const MEDICAL_EXPENSE_LIMIT: u32 = 500_000;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct CoverageLimit {
    pub limit: u32,
    pub currency: String,
}

impl CoverageLimit {
    fn new(limit: u32) -> Self {
        Self { limit, currency: CURRENCY.to_owned() }
    }
}

/// Limits per claim category. Identical for every policy.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Coverage {
    pub baggage_delay: CoverageLimit,
    pub lost_documents: CoverageLimit,
    pub medical_expense: CoverageLimit,
}

impl Coverage {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            baggage_delay: CoverageLimit::new(BAGGAGE_DELAY_LIMIT),
            lost_documents: CoverageLimit::new(LOST_DOCUMENTS_LIMIT),
            medical_expense: CoverageLimit::new(MEDICAL_EXPENSE_LIMIT),
        }
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PolicyResponse {
    pub policy_number: String,
    pub policy_holder: String,
    pub policy_type: String,
    pub status: String,
    pub coverage: Coverage,
}
