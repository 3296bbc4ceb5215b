//! Dispatch interface synthesis
//!
//! `interface!` turns an ordered operation list into a family of K + 1
//! traits: one per suffix of the list, each adding exactly one
//! `Dispatch<Op>` slot on top of the next. The terminal suffix is the
//! bare `Meta` introspection contract.

use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, format_ident, quote};
use syn::{
    Attribute, Ident, Token, Type, Visibility, bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

// =============================================================================
// interface! Input Parser
// =============================================================================

/// `$(#[..])* $vis trait $name: [$($op),*];`
pub struct InterfaceInput {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub operations: Vec<Type>,
}

impl Parse for InterfaceInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![trait]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let content;
        bracketed!(content in input);
        let operations: Punctuated<Type, Token![,]> = Punctuated::parse_terminated(&content)?;
        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
        }
        Ok(InterfaceInput {
            attrs,
            vis,
            name,
            operations: operations.into_iter().collect(),
        })
    }
}

/// Check for duplicate operations in the list
pub fn check_duplicates(operations: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for op in operations {
        let op_str = op.to_token_stream().to_string().replace(' ', "");
        if !seen.insert(op_str.clone()) {
            return Err(syn::Error::new_spanned(
                op,
                format!(
                    "duplicate operation `{}`\n\
                     \n\
                     Each operation contributes exactly one dispatch entry point.\n\
                     Listing an operation twice would make slot resolution ambiguous.",
                    op_str
                ),
            ));
        }
    }
    Ok(())
}

// =============================================================================
// expand_interface
// =============================================================================

pub fn expand_interface(input: InterfaceInput) -> syn::Result<TokenStream2> {
    check_duplicates(&input.operations)?;

    let InterfaceInput {
        attrs,
        vis,
        name,
        operations,
    } = input;

    // Trait name for every suffix: Name, NameSuffix1, .., NameSuffixK.
    let mut level_names = vec![name.clone()];
    for depth in 1..=operations.len() {
        level_names.push(format_ident!("{}Suffix{}", name, depth));
    }

    let mut items = TokenStream2::new();
    for (depth, trait_name) in level_names.iter().enumerate() {
        let level_attrs = if depth == 0 {
            quote! { #(#attrs)* }
        } else {
            let doc = format!(
                "Suffix of [`{}`]: the same interface without its first {} operation{}.",
                name,
                depth,
                if depth == 1 { "" } else { "s" },
            );
            quote! { #[doc = #doc] }
        };

        let supertraits = match operations.get(depth) {
            Some(op) => {
                let next = &level_names[depth + 1];
                quote! { #next + ::metafield::Dispatch<#op> }
            }
            // Terminal suffix: introspection only.
            None => quote! { ::metafield::Meta },
        };

        items.extend(quote! {
            #level_attrs
            #vis trait #trait_name: #supertraits {}

            impl<X> #trait_name for X where X: #supertraits {}
        });
    }

    // NameOps alias: the list as a Cons-chain, folded from the tail.
    let list_name = format_ident!("{}Ops", name);
    let list_doc = format!("Operation list of [`{}`].", name);
    let mut list = quote! { ::metafield::Nil };
    for op in operations.iter().rev() {
        list = quote! { ::metafield::Cons<#op, #list> };
    }
    items.extend(quote! {
        #[doc = #list_doc]
        #[allow(dead_code)]
        #vis type #list_name = #list;
    });

    Ok(items)
}

// =============================================================================
// Tests
// =============================================================================
