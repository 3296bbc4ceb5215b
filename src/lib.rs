#![cfg_attr(not(feature = "std"), no_std)]

//! # metafield
//!
//! Compile-time field reflection with open operation dispatch.
//!
//! **One uniform interface per field, one dispatch slot per operation.**
//!
//! ## Architecture
//!
//! A *field* is any typed value wrapped behind an [`Accessor`]. An
//! *operation* declares a result type ([`Operation`]) plus one routine per
//! concrete value type it supports ([`Process`]). Given an ordered
//! operation list, the [`interface!`] macro synthesizes the shared
//! abstract interface, and [`FieldAdapter`] binds any accessor to it:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Contracts                                               |
//! |  - Operation / Process (consumed), Accessor (consumed)            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Dispatch Core                                           |
//! |  - Meta (introspection), Dispatch<Op> (one slot per operation)    |
//! |  - Nil / Cons operation lists, FieldAdapter<A>                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - interface! (trait family synthesis), #[derive(Operation)]      |
//! |  - fields! (heterogeneous collections), owned/global/borrowed     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Both axes stay open: a new operation is a new type with `Process`
//! impls, a new field type is a new `Process` impl per operation.
//! Neither touches existing code, and every pairing is checked by the
//! compiler; there is no runtime registry.
//!
//! ## Quick Start
//!
//! ```
//! use metafield::prelude::*;
//!
//! #[derive(Operation)]
//! #[operation(output = i32)]
//! struct Increment;
//!
//! impl Process<i32> for Increment {
//!     fn process(&mut self, value: &mut i32) -> i32 {
//!         *value += 1;
//!         *value
//!     }
//! }
//!
//! interface! {
//!     pub trait Counter: [Increment];
//! }
//!
//! let mut field = owned("value1", 0_i32);
//! let view: &mut dyn Counter = &mut field;
//!
//! let mut inc = Increment;
//! assert_eq!(view.dispatch(&mut inc), 1);
//! assert_eq!(view.dispatch(&mut inc), 2);
//! assert_eq!(view.name(), "value1");
//! ```

// Allow `::metafield` to work inside the crate itself
extern crate self as metafield;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Contracts
// =============================================================================
pub mod accessor;
pub mod operation;

// =============================================================================
// Layer 1: Dispatch Core
// =============================================================================
pub mod adapter;
pub mod list;
pub mod meta;

// =============================================================================
// Layer 2: User API
// =============================================================================

// Syntax macros (fields!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use accessor::{Accessor, Borrowed, Global, Owned};
pub use adapter::{FieldAdapter, borrowed, global, owned};
pub use list::{Cons, DispatchAll, Nil, OpList, ProcessAll};
pub use meta::{Dispatch, Meta};
pub use operation::{Operation, Process};

// Re-export proc-macros
pub use macros::{Operation, interface};

// Support module for #[macro_export] macros - not public API.
#[cfg(feature = "alloc")]
#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;
}

/// Common items for field reflection.
pub mod prelude {
    pub use crate::accessor::{Accessor, Borrowed, Global, Owned};
    pub use crate::adapter::{FieldAdapter, borrowed, global, owned};
    pub use crate::list::{Cons, DispatchAll, Nil, OpList, ProcessAll};
    pub use crate::meta::{Dispatch, Meta};
    pub use crate::operation::{Operation, Process};
    pub use macros::{Operation, interface};
    // Note: fields! is #[macro_export] so it lives at the crate root
}
