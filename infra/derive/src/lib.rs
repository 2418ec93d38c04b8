#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `ClaimsHub` crates.
//!
//! * [`chub_error`]: domain error enums with context support.
//! * [`api_model`] / [`api_handler`]: wire DTOs and Axum handlers with `OpenAPI` metadata.
//! * [`chub_slice`]: `Arc`-backed feature slice handles for the kernel registry.
//! * [`main`]: async entry point on a tuned Tokio runtime (re-exported by `chub-runtime`).
//!
//! Examples are `ignore`d here because the expansions reference crates that depend on this one.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Bootstraps a Tokio runtime for an `async fn main`.
///
/// Profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
///
/// ```rust,ignore
/// #[chub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a request/response model of the HTTP API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `#[serde(rename_all = "snake_case")]` unless overridden with
///   `rename_all = "..."`; the public API speaks `snake_case`.
/// * Applies `#[serde(deny_unknown_fields)]` unless `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct LoginRequest {
///     pub passport_number: String,
///     pub policy_number: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Wraps an Axum handler and forwards the arguments to `utoipa::path`
/// when the consuming crate enables its `server` feature.
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/api/policy/{policy_number}",
///     responses((status = OK, body = PolicyResponse)),
///     tag = POLICY_TAG,
/// )]
/// pub async fn policy_handler(
///     Path(policy_number): Path<String>,
/// ) -> Result<Json<PolicyResponse>, ApiError> {
///     todo!()
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a domain error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, Source>` for every variant holding a `source` field.
/// * `From<Source>` for those variants, so `?` works on upstream errors.
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper used in the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must have named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[chub_error]
/// pub enum DirectoryError {
///     #[error("Duplicate passport{}: {message}", format_context(.context))]
///     DuplicatePassport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn chub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it,
/// and implements `chub_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[chub_derive::chub_slice]
/// pub struct Policy {
///     directory: Directory,
/// }
///
/// let slice = Policy::new(PolicyInner { directory });
/// ```
#[proc_macro_attribute]
pub fn chub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
