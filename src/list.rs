//! Type-level operation lists.
//!
//! An operation list is the compile-time description of a dispatch
//! interface: `Cons<Op1, Cons<Op2, Nil>>` stands for the ordered pair
//! `[Op1, Op2]`. Lists carry no data; they exist only as type
//! parameters. The [`interface!`](macros::interface) macro emits one
//! alias per generated interface.

use core::marker::PhantomData;

use crate::meta::Dispatch;
use crate::operation::{Operation, Process};

/// Empty operation list.
pub struct Nil;

/// List cell: one operation followed by the rest of the list.
///
/// Duplicate rejection lives in `interface!`, the synthesis path for
/// these lists. A hand-written `Cons<Op, Cons<Op, Nil>>` is not
/// checked: both entries name the same `Dispatch<Op>` slot, so the
/// list over-counts `LEN` without adding an entry point. Build lists
/// through the macro.
pub struct Cons<Op, Rest>(PhantomData<(Op, Rest)>);

/// Ordered compile-time sequence of operation types.
pub trait OpList {
    /// Number of dispatch entry points the list contributes.
    const LEN: usize;
}

impl OpList for Nil {
    const LEN: usize = 0;
}

impl<Op: Operation, Rest: OpList> OpList for Cons<Op, Rest> {
    const LEN: usize = 1 + Rest::LEN;
}

// =============================================================================
// Recursive bounds over a whole list
// =============================================================================

/// Marker: `Self` has a dispatch slot for every operation in `L`.
///
/// Lets generic code demand a full interface through the list type
/// instead of spelling out each `Dispatch<Op>` bound.
pub trait DispatchAll<L: OpList> {}

impl<X> DispatchAll<Nil> for X {}

impl<X, Op, Rest> DispatchAll<Cons<Op, Rest>> for X
where
    Op: Operation,
    Rest: OpList,
    X: Dispatch<Op> + DispatchAll<Rest>,
{
}

/// Marker: every operation in `Self` has a routine for values of type `T`.
///
/// An adapter over a `T`-valued accessor satisfies an interface exactly
/// when the interface's list satisfies `ProcessAll<T>`.
pub trait ProcessAll<T>: OpList {}

impl<T> ProcessAll<T> for Nil {}

impl<T, Op, Rest> ProcessAll<T> for Cons<Op, Rest>
where
    Op: Process<T>,
    Rest: ProcessAll<T>,
{
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct OpA;
    impl Operation for OpA {
        type Output = ();
    }

    struct OpB;
    impl Operation for OpB {
        type Output = i32;
    }

    #[test]
    fn test_len_counts_operations() {
        assert_eq!(<Nil as OpList>::LEN, 0);
        assert_eq!(<Cons<OpA, Nil> as OpList>::LEN, 1);
        assert_eq!(<Cons<OpA, Cons<OpB, Nil>> as OpList>::LEN, 2);
    }

    #[test]
    fn test_process_all_bound() {
        impl Process<u8> for OpA {
            fn process(&mut self, _value: &mut u8) {}
        }
        impl Process<u8> for OpB {
            fn process(&mut self, value: &mut u8) -> i32 {
                *value as i32
            }
        }

        fn assert_supported<L: ProcessAll<u8>>() {}
        assert_supported::<Cons<OpA, Cons<OpB, Nil>>>();
        assert_supported::<Nil>();
    }
}
