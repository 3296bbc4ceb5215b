//! The generic adapter binding one accessor to every interface it can
//! serve.

use core::any::{Any, TypeId};

use crate::accessor::{Accessor, Borrowed, Global, Owned};
use crate::meta::{Dispatch, Meta};
use crate::operation::Process;

/// Concrete carrier of one field.
///
/// `FieldAdapter<A>` implements [`Meta`] by forwarding to its accessor
/// and [`Dispatch<Op>`] for every operation with a routine for
/// `A::Value`. Any interface generated by
/// [`interface!`](macros::interface) whose operations all support
/// `A::Value` is therefore implemented automatically through the
/// blanket impls; pairing the adapter with an unsupported operation is
/// rejected by the compiler as a missing [`Process`] bound, never at
/// run time.
///
/// The adapter owns its accessor exclusively and adds no behavior of
/// its own around construction or dispatch.
pub struct FieldAdapter<A> {
    accessor: A,
}

impl<A: Accessor> FieldAdapter<A> {
    /// Wrap an already-built accessor.
    pub fn new(accessor: A) -> Self {
        FieldAdapter { accessor }
    }

    /// Recover the underlying accessor.
    pub fn into_inner(self) -> A {
        self.accessor
    }
}

impl<A: Accessor> Meta for FieldAdapter<A> {
    fn name(&self) -> &'static str {
        self.accessor.real_name()
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<A::Value>()
    }

    fn address(&mut self) -> &mut dyn Any {
        self.accessor.access()
    }
}

impl<A, Op> Dispatch<Op> for FieldAdapter<A>
where
    A: Accessor,
    Op: Process<A::Value>,
{
    #[inline(always)]
    fn dispatch(&mut self, operation: &mut Op) -> Op::Output {
        operation.process(self.accessor.access())
    }
}

// =============================================================================
// Forwarding constructors
// =============================================================================

/// Adapter over owned storage; arguments forward to [`Owned::new`].
pub fn owned<T: 'static>(name: &'static str, value: T) -> FieldAdapter<Owned<T>> {
    FieldAdapter::new(Owned::new(name, value))
}

/// Adapter over a process-wide slot; arguments forward to [`Global::new`].
pub fn global<T: 'static>(name: &'static str, slot: &'static mut T) -> FieldAdapter<Global<T>> {
    FieldAdapter::new(Global::new(name, slot))
}

/// Adapter over caller-managed storage; arguments forward to
/// [`Borrowed::new`].
pub fn borrowed<'a, T: 'static>(
    name: &'static str,
    slot: &'a mut T,
) -> FieldAdapter<Borrowed<'a, T>> {
    FieldAdapter::new(Borrowed::new(name, slot))
}
