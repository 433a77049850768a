//! Procedural macros for `humerr`. Not public API; use the reexports in `humerr` instead.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as SynTokenStream, TokenTree};
use quote::quote;
use venial::{Attribute, AttributeValue, Enum, Error, Fields, Item};

/// Derives `humerr::ErrorCode` for a fieldless enum.
///
/// The first line of each variant's doc comment becomes the description of that code. Every
/// discriminant must fit in a `u32`, so only `u8`, `u16` and `u32` reprs are accepted.
#[proc_macro_derive(ErrorCode)]
pub fn derive_error_code(input: TokenStream) -> TokenStream {
    match derive_error_code_impl(input.into()) {
        Ok(v) => v.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_error_code_impl(input: SynTokenStream) -> Result<SynTokenStream, Error> {
    let item = venial::parse_item(input)?;
    let Item::Enum(item) = item else {
        return Err(Error::new_at_span(
            Span::call_site(),
            "`ErrorCode` can only be derived on enums",
        ));
    };
    if item.generic_params.is_some() {
        return Err(Error::new_at_span(
            item.name.span(),
            "`ErrorCode` cannot be derived on generic enums",
        ));
    }
    check_repr(&item)?;
    generate(&item)
}

/// Rejects integer reprs that can hold values outside of `u32`.
fn check_repr(item: &Enum) -> Result<(), Error> {
    for attr in &item.attributes {
        let is_repr = matches!(attr.path.as_slice(), [TokenTree::Ident(ident)] if *ident == "repr");
        let AttributeValue::Group(_, tokens) = &attr.value else { continue };
        if !is_repr {
            continue;
        }

        for token in tokens {
            if let TokenTree::Ident(ident) = token {
                let ty = ident.to_string();
                if INVALID_REPRS.contains(&ty.as_str()) {
                    return Err(Error::new_at_span(
                        ident.span(),
                        format!("`ErrorCode` cannot be derived on enums with `repr({ty})`"),
                    ));
                }
            }
        }
    }
    Ok(())
}

const INVALID_REPRS: &[&str] =
    &["i8", "i16", "i32", "i64", "i128", "isize", "u64", "u128", "usize"];

fn generate(item: &Enum) -> Result<SynTokenStream, Error> {
    let name = &item.name;
    let type_name = name.to_string();

    let mut variants = Vec::new();
    let mut arms = Vec::new();
    let mut checks = Vec::new();
    for (variant, _) in item.variants.iter() {
        let variant_ident = &variant.name;
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_at_span(
                variant_ident.span(),
                "`ErrorCode` can only be derived on fieldless enums",
            ));
        }
        let variant_name = variant_ident.to_string();
        let message = match doc_literal(&variant.attributes) {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };

        variants.push(quote! { #name::#variant_ident });
        checks.push(quote! {
            ::core::assert!(
                #name::#variant_ident as i128 >= 0
                    && #name::#variant_ident as i128 <= ::core::primitive::u32::MAX as i128,
                "`ErrorCode` discriminants must fit in a u32",
            );
        });
        arms.push(quote! {
            #name::#variant_ident => {
                static INFO: ::humerr::ErrorCodeInfo = ::humerr::ErrorCodeInfo {
                    value: #name::#variant_ident as u32,
                    type_name: #type_name,
                    variant_name: #variant_name,
                    message: #message,
                };
                &INFO
            }
        });
    }
    if variants.is_empty() {
        return Err(Error::new_at_span(
            name.span(),
            "`ErrorCode` cannot be derived on enums without variants",
        ));
    }

    Ok(quote! {
        const _: () = {
            #(#checks)*
        };

        impl ::humerr::ErrorCode for #name {
            const VARIANTS: &'static [Self] = &[#(#variants,)*];

            fn info(self) -> &'static ::humerr::ErrorCodeInfo {
                match self {
                    #(#arms)*
                }
            }
        }
    })
}

/// Returns the string literal of the first `#[doc = "..."]` attribute, if any.
fn doc_literal(attrs: &[Attribute]) -> Option<&TokenTree> {
    attrs.iter().find_map(|attr| {
        let is_doc = matches!(attr.path.as_slice(), [TokenTree::Ident(ident)] if *ident == "doc");
        match &attr.value {
            AttributeValue::Equals(_, value) if is_doc => match value.as_slice() {
                [lit @ TokenTree::Literal(_)] => Some(lit),
                _ => None,
            },
            _ => None,
        }
    })
}
