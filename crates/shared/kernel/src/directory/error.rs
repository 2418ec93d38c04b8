use std::borrow::Cow;

#[chub_derive::chub_error]
pub enum DirectoryError {
    #[error("Duplicate passport number{}: {message}", format_context(.context))]
    DuplicatePassport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Duplicate policy number{}: {message}", format_context(.context))]
    DuplicatePolicy { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
