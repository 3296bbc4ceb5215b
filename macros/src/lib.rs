//! Procedural macros for the metafield reflection crate
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `interface!{}` | - | Synthesize a dispatch interface from an operation list |
//! | `#[derive(Operation)]` | struct/enum | Implement `Operation` (`#[operation(output = T)]`) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Operation)]
//! #[operation(output = i32)]
//! struct Increment;
//!
//! interface! {
//!     /// Every field our walker understands.
//!     pub trait FieldView: [Increment];
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod interface;
mod operation;

/// Synthesize a dispatch interface from an ordered operation list.
///
/// ```ignore
/// interface! {
///     pub trait FieldView: [Increment, Describe];
/// }
/// ```
///
/// Expands to a chain of trait definitions, one per suffix of the list:
/// `FieldView` adds a `Dispatch<Increment>` slot on top of
/// `FieldViewSuffix1`, which adds `Dispatch<Describe>` on top of
/// `FieldViewSuffix2`, which is plain `Meta`. Each level carries a
/// blanket impl, so any type implementing `Meta` plus every slot
/// implements the whole family. A `FieldViewOps` alias names the
/// matching `Cons`-list.
///
/// An empty list (`pub trait Plain: [];`) is valid and yields a pure
/// introspection contract.
///
/// Duplicate operations are rejected at expansion time. Detection is
/// textual (token-for-token, ignoring whitespace); a type alias that
/// spells the same operation differently is not caught.
#[proc_macro]
pub fn interface(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as interface::InterfaceInput);
    interface::expand_interface(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `Operation` for a type.
///
/// The result type defaults to `()`; override it with
/// `#[operation(output = T)]`. Per-type `Process` impls stay manual:
/// an operation supports exactly the value types it is given routines
/// for.
#[proc_macro_derive(Operation, attributes(operation))]
pub fn derive_operation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    operation::expand_derive_operation(&input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
