//! Field accessors: the three ownership bindings a field can have.
//!
//! An accessor owns or references exactly one concrete value and reports
//! a display name for it. Accessors are never shared between adapters;
//! each holds its storage exclusively:
//!
//! - [`Owned`] - the storage lives inside the accessor.
//! - [`Global`] - exclusive reference into a process-wide slot.
//! - [`Borrowed`] - exclusive reference into caller-managed storage.

/// Value access capability consumed by the adapter layer.
///
/// `Value: 'static` because the adapter reports the value's runtime
/// type identity; the accessor itself may borrow.
pub trait Accessor {
    /// Concrete type of the accessed value.
    type Value: 'static;

    /// Display name of the field. Constant for the accessor's lifetime.
    fn real_name(&self) -> &'static str;

    /// Exclusive handle to the current value.
    fn access(&mut self) -> &mut Self::Value;
}

// =============================================================================
// Owned
// =============================================================================

/// Exclusively owned storage; the value lives and dies with the accessor.
pub struct Owned<T> {
    name: &'static str,
    value: T,
}

impl<T> Owned<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Owned { name, value }
    }

    /// Recover the stored value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: 'static> Accessor for Owned<T> {
    type Value = T;

    fn real_name(&self) -> &'static str {
        self.name
    }

    fn access(&mut self) -> &mut T {
        &mut self.value
    }
}

// =============================================================================
// Global
// =============================================================================

/// Reference to a fixed, process-wide slot.
///
/// The slot outlives every accessor built over it. The usual source of
/// the `&'static mut` is [`Box::leak`](alloc::boxed::Box::leak); any
/// other exclusive leaked slot works the same way.
pub struct Global<T: 'static> {
    name: &'static str,
    slot: &'static mut T,
}

impl<T: 'static> Global<T> {
    pub fn new(name: &'static str, slot: &'static mut T) -> Self {
        Global { name, slot }
    }
}

impl<T: 'static> Accessor for Global<T> {
    type Value = T;

    fn real_name(&self) -> &'static str {
        self.name
    }

    fn access(&mut self) -> &mut T {
        &mut *self.slot
    }
}

// =============================================================================
// Borrowed
// =============================================================================

/// Reference to storage the caller manages elsewhere.
///
/// The storage outlives the accessor; mutations performed through
/// dispatch stay visible in the original binding afterwards.
pub struct Borrowed<'a, T> {
    name: &'static str,
    slot: &'a mut T,
}

impl<'a, T> Borrowed<'a, T> {
    pub fn new(name: &'static str, slot: &'a mut T) -> Self {
        Borrowed { name, slot }
    }
}

impl<T: 'static> Accessor for Borrowed<'_, T> {
    type Value = T;

    fn real_name(&self) -> &'static str {
        self.name
    }

    fn access(&mut self) -> &mut T {
        &mut *self.slot
    }
}
