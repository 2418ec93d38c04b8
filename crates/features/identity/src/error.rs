use std::borrow::Cow;

/// Message shared by every rejected login, so callers cannot probe which passports exist.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// A specialized [`IdentityError`] enum of this crate.
#[chub_derive::chub_error]
pub enum IdentityError {
    /// Configuration errors for the identity slice.
    #[error("Identity config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Unknown passport or mismatching policy number.
    #[error("Identity auth error{}: {message}", format_context(.context))]
    InvalidCredentials { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IdentityError {
    pub(crate) const fn invalid_credentials() -> Self {
        Self::InvalidCredentials { message: Cow::Borrowed(INVALID_CREDENTIALS), context: None }
    }
}

#[cfg(feature = "server")]
impl From<IdentityError> for chub_kernel::server::error::ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidCredentials { message, .. } => Self::unauthorized(message),
            other @ IdentityError::Config { .. } => Self::from(other.to_string()),
        }
    }
}
