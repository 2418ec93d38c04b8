use std::borrow::Cow;

pub const POLICY_NOT_FOUND: &str = "Policy not found";

#[chub_derive::chub_error]
pub enum PolicyError {
    #[error("Policy config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Policy lookup error{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PolicyError {
    pub(crate) const fn not_found() -> Self {
        Self::NotFound { message: Cow::Borrowed(POLICY_NOT_FOUND), context: None }
    }
}

#[cfg(feature = "server")]
impl From<PolicyError> for chub_kernel::server::error::ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::NotFound { message, .. } => Self::not_found(message),
            other @ PolicyError::Config { .. } => Self::from(other.to_string()),
        }
    }
}
