//! The introspection surface and the per-operation dispatch slot.
//!
//! A full dispatch interface is the composition of [`Meta`] with one
//! [`Dispatch`] bound per operation; the
//! [`interface!`](macros::interface) macro performs that composition
//! suffix by suffix, so an interface over K operations is a family of
//! K + 1 traits ending in bare `Meta`.

use core::any::{Any, TypeId};

use crate::operation::Operation;

/// Introspection entry points shared by every dispatch interface.
///
/// This is also the complete interface for an empty operation list: a
/// field can be named, identified, and addressed without supporting
/// any operation at all.
pub trait Meta {
    /// Display name of the field. Never changes for one adapter.
    fn name(&self) -> &'static str;

    /// Runtime identity of the field's concrete value type.
    ///
    /// Stable across calls and equal to `self.address().type_id()`.
    fn value_type(&self) -> TypeId;

    /// Type-erased exclusive handle to the field's current storage.
    ///
    /// Mutations performed by earlier dispatches are visible here.
    fn address(&mut self) -> &mut dyn Any;
}

/// One dispatch entry point.
///
/// `dispatch` forwards the operation to the field's current value and
/// returns the routine's result unchanged; the core adds no
/// interception, wrapping, or retry around the call. The slot for each
/// operation type is distinct, so any number of `Dispatch<Op>` bounds
/// compose on one interface without colliding.
pub trait Dispatch<Op: Operation> {
    fn dispatch(&mut self, operation: &mut Op) -> Op::Output;
}
