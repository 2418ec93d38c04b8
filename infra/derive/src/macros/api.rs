use super::util::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "snake_case";

/// Expands `#[api_model]`: common derives, optional `ToSchema`, and the serde policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match model_attributes(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` behind the
/// `server` feature of the consuming crate.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

fn model_attributes(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let existing = existing_serde(&input.attrs)?;
    let derives = derived_trait_names(&input.attrs);

    let missing: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    let derive_attr = if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = args.rename_all.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));
    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny = args.deny_unknown_fields.unwrap_or(true);
    let deny_attr = match (existing.deny_unknown_fields, deny) {
        (true, false) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        },
        (false, true) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
    })
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if name_value.path.is_ident("rename_all") {
            let value = string_literal(&name_value)?;
            ensure_unset(parsed.rename_all.is_some(), &name_value)?;
            parsed.rename_all = Some(value);
        } else if name_value.path.is_ident("deny_unknown_fields") {
            let value = bool_literal(&name_value)?;
            ensure_unset(parsed.deny_unknown_fields.is_some(), &name_value)?;
            parsed.deny_unknown_fields = Some(value);
        } else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn ensure_unset(already_set: bool, token: &MetaNameValue) -> syn::Result<()> {
    if already_set {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    Ok(())
}

fn literal(name_value: &MetaNameValue) -> Option<&Lit> {
    match &name_value.value {
        Expr::Lit(expr) => Some(&expr.lit),
        _ => None,
    }
}

fn string_literal(name_value: &MetaNameValue) -> syn::Result<LitStr> {
    match literal(name_value) {
        Some(Lit::Str(lit)) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(&name_value.value, "expected a string literal")),
    }
}

fn bool_literal(name_value: &MetaNameValue) -> syn::Result<bool> {
    match literal(name_value) {
        Some(Lit::Bool(lit)) => Ok(lit.value),
        _ => Err(syn::Error::new_spanned(&name_value.value, "expected a boolean literal")),
    }
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<ExistingSerde> {
    let mut existing = ExistingSerde::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                existing.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                existing.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Skip values of unrelated serde options (`default = "..."`, ...).
                let _: Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(existing)
}
