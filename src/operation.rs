//! Operation contract: one result type, one processing routine per
//! supported concrete value type.
//!
//! Operations are caller-owned and may be stateful (an accumulator, a
//! formatter); they are passed by mutable reference at each dispatch.

/// An operation over field values.
///
/// Implementors declare the single result type every routine of the
/// operation produces. The per-type routines live in [`Process`]: an
/// operation supports exactly the value types it provides `Process`
/// impls for, and pairing it with anything else is a missing-bound
/// compile error.
///
/// Derivable via `#[derive(Operation)]` with an optional
/// `#[operation(output = T)]` attribute.
pub trait Operation {
    /// Result of every dispatch of this operation.
    type Output;
}

/// Processing routine of an operation for value type `T`.
///
/// The value arrives by mutable reference, so a routine may rewrite the
/// field in place; the mutation is immediately visible through the
/// adapter's introspection surface. Whatever failure convention the
/// routine uses (`Result` output, panic) propagates to the dispatch
/// caller unchanged.
pub trait Process<T: ?Sized>: Operation {
    fn process(&mut self, value: &mut T) -> Self::Output;
}
