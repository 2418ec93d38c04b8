use chub_derive::chub_error;
use std::borrow::Cow;

#[chub_error]
pub enum LookupError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), LookupError> {
    Err(std::io::Error::other("disk")).context("Reading fixture")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading fixture): disk");

    let missing: Result<(), LookupError> =
        Err(LookupError::NotFound { message: "passport".into(), context: None });
    let err = missing.context("Itinerary lookup").unwrap_err();
    assert_eq!(err.to_string(), "Not found (Itinerary lookup): passport");

    let internal: LookupError = "boom".into();
    assert!(matches!(internal, LookupError::Internal { .. }));
}
