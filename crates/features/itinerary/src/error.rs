use std::borrow::Cow;

pub const USER_NOT_FOUND: &str = "User not found";

#[chub_derive::chub_error]
pub enum ItineraryError {
    #[error("Itinerary config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Itinerary lookup error{}: {message}", format_context(.context))]
    UserNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ItineraryError {
    pub(crate) const fn user_not_found() -> Self {
        Self::UserNotFound { message: Cow::Borrowed(USER_NOT_FOUND), context: None }
    }
}

#[cfg(feature = "server")]
impl From<ItineraryError> for chub_kernel::server::error::ApiError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::UserNotFound { message, .. } => Self::not_found(message),
            other @ ItineraryError::Config { .. } => Self::from(other.to_string()),
        }
    }
}
