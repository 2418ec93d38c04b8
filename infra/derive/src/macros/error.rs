use super::util::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, FieldsNamed, GenericArgument, Ident, PathArguments,
    Type, Variant,
};

struct VariantMeta<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("chub_error can only be applied to enums"); };
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = derived_trait_names(&input.attrs);
    let mut extra = Vec::new();
    if !derives.contains("Debug") {
        extra.push(quote! { Debug });
    }
    if !derives.contains("Error") {
        extra.push(quote! { ::thiserror::Error });
    }
    let derive_attr = if extra.is_empty() { quote! {} } else { quote! { #[derive(#(#extra),*)] } };

    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    }
}

fn parse_variant(variant: &Variant) -> syn::Result<VariantMeta<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "chub_error requires named fields for source/context handling",
        ));
    };

    let has_context = has_context_field(fields)?;
    let source = fields
        .named
        .iter()
        .find(|field| {
            field.ident.as_ref().is_some_and(|ident| ident == "source")
                || field
                    .attrs
                    .iter()
                    .any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
        })
        .and_then(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)));

    if source.is_some() && !has_context {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "chub_error requires `context: Option<Cow<'static, str>>` for variants with a source",
        ));
    }

    Ok(VariantMeta {
        ident: &variant.ident,
        source,
        has_context,
        cfg_attrs: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
    })
}

fn has_context_field(fields: &FieldsNamed) -> syn::Result<bool> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == "context"))
    else {
        return Ok(false);
    };

    if is_optional_static_cow(&field.ty) {
        Ok(true)
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #(#arms)*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, v: &VariantMeta<'_>) -> Option<TokenStream> {
    if v.ident == "Internal" {
        return None;
    }
    let (field, ty) = v.source?;
    let variant = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#variant { #field, context: None } }
        }

        #(#cfg_attrs)*
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name> {
                self.map_err(|#field| #name::#variant { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote! {};
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(s), context: None }
            }
        }

        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(s), context: None }
            }
        }
    }
}

/// Matches `Option<Cow<'static, str>>` by the last path segment of each type.
fn is_optional_static_cow(ty: &Type) -> bool {
    fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a PathArguments> {
        let Type::Path(path) = ty else { return None };
        let segment = path.path.segments.last()?;
        (segment.ident == wrapper).then_some(&segment.arguments)
    }

    let Some(PathArguments::AngleBracketed(option_args)) = single_generic(ty, "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(cow)) = option_args.args.first() else {
        return false;
    };
    let Some(PathArguments::AngleBracketed(cow_args)) = single_generic(cow, "Cow") else {
        return false;
    };

    let mut args = cow_args.args.iter();
    let lifetime_is_static =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let target_is_str = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|seg| seg.ident == "str")
    );

    lifetime_is_static && target_is_str
}
