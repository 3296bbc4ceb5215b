//! `#[derive(Operation)]` expansion
//!
//! Emits an `Operation` impl with the result type taken from
//! `#[operation(output = T)]`, defaulting to `()`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type};

pub fn expand_derive_operation(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut output: Option<Type> = None;
    for attr in &input.attrs {
        if attr.path().is_ident("operation") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("output") {
                    output = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `output = <type>`"))
                }
            })?;
        }
    }
    let output = match output {
        Some(ty) => quote! { #ty },
        None => quote! { () },
    };

    Ok(quote! {
        impl #impl_generics ::metafield::Operation for #ident #ty_generics #where_clause {
            type Output = #output;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_output_attribute() {
        let input: DeriveInput = parse_quote! {
            #[operation(output = i32)]
            struct Increment;
        };
        let out = expand_derive_operation(&input).unwrap().to_string();
        assert!(out.contains("Operation"));
        assert!(out.contains("type Output = i32"));
    }

    #[test]
    fn test_output_defaults_to_unit() {
        let input: DeriveInput = parse_quote! {
            struct Touch;
        };
        let out = expand_derive_operation(&input).unwrap().to_string();
        assert!(out.contains("type Output = ()"));
    }
}
