use std::borrow::Cow;

pub const USER_NOT_FOUND: &str = "User not found";

#[chub_derive::chub_error]
pub enum ClaimsError {
    #[error("Claims config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Claimant lookup error{}: {message}", format_context(.context))]
    UserNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ClaimsError {
    pub(crate) const fn user_not_found() -> Self {
        Self::UserNotFound { message: Cow::Borrowed(USER_NOT_FOUND), context: None }
    }
}

#[cfg(feature = "server")]
impl From<ClaimsError> for chub_kernel::server::error::ApiError {
    fn from(err: ClaimsError) -> Self {
        match err {
            ClaimsError::UserNotFound { message, .. } => Self::not_found(message),
            other @ ClaimsError::Config { .. } => Self::from(other.to_string()),
        }
    }
}
