//! The three ownership bindings behind one interface

use std::any::TypeId;

use metafield::fields;
use metafield::prelude::*;

#[derive(Operation)]
#[operation(output = char)]
struct Bump;

impl Process<char> for Bump {
    fn process(&mut self, value: &mut char) -> char {
        *value = ((*value as u8) + 1) as char;
        *value
    }
}

interface! {
    trait CharView: [Bump];
}

#[test]
fn test_owned_accessor() {
    let mut field = owned("value2", 'A');
    let mut bump = Bump;

    assert_eq!(field.dispatch(&mut bump), 'B');
    assert_eq!(field.name(), "value2");
    assert_eq!(field.into_inner().into_value(), 'B');
}

#[test]
fn test_global_accessor() {
    // Process-wide slot; the adapter only borrows it.
    let slot: &'static mut char = Box::leak(Box::new('C'));
    let mut field = global("value3", slot);

    let mut bump = Bump;
    assert_eq!(field.dispatch(&mut bump), 'D');
    assert_eq!(field.value_type(), TypeId::of::<char>());
    assert_eq!(field.address().downcast_mut::<char>(), Some(&mut 'D'));
}

#[test]
fn test_borrowed_accessor_mutation_outlives_adapter() {
    let mut storage = 'a';

    {
        let mut field = borrowed("value4", &mut storage);
        let mut bump = Bump;
        assert_eq!(field.dispatch(&mut bump), 'b');
        assert_eq!(field.dispatch(&mut bump), 'c');
    }

    // The adapter is gone; the caller-managed storage keeps the result.
    assert_eq!(storage, 'c');
}

#[test]
fn test_all_variants_behind_one_interface() {
    let mut storage = 'x';
    let slot: &'static mut char = Box::leak(Box::new('y'));

    let mut local = owned("local", 'w');
    let mut singleton = global("singleton", slot);
    let mut external = borrowed("external", &mut storage);

    // Boxing would demand 'static adapters; borrowed handles keep the
    // external variant in the same walk.
    let mut collection: Vec<&mut dyn CharView> =
        vec![&mut local, &mut singleton, &mut external];

    let mut bump = Bump;
    let names: Vec<&str> = collection.iter_mut().map(|h| h.name()).collect();
    let bumped: Vec<char> = collection
        .iter_mut()
        .map(|h| h.dispatch(&mut bump))
        .collect();

    assert_eq!(names, ["local", "singleton", "external"]);
    assert_eq!(bumped, ['x', 'z', 'y']);
}

#[test]
fn test_borrowed_adapter_returned_from_helper() {
    // The constructor's lifetime follows the slot, not the name.
    fn make<'a>(slot: &'a mut char) -> FieldAdapter<Borrowed<'a, char>> {
        borrowed("held", slot)
    }

    let mut storage = 'q';
    let mut field = make(&mut storage);
    let mut bump = Bump;
    assert_eq!(field.dispatch(&mut bump), 'r');
    assert_eq!(storage, 'r');
}

#[test]
fn test_boxed_static_variants() {
    let slot: &'static mut char = Box::leak(Box::new('m'));
    let mut collection = fields![CharView =>
        owned("local", 'k'),
        global("singleton", slot),
    ];

    let mut bump = Bump;
    let bumped: Vec<char> = collection
        .iter_mut()
        .map(|h| h.dispatch(&mut bump))
        .collect();
    assert_eq!(bumped, ['l', 'n']);
}

#[test]
fn test_accessor_construction_forwards_unchanged() {
    // The adapter adds nothing: wrapping an accessor by hand and using
    // the forwarding constructor are the same thing.
    let direct = FieldAdapter::new(Owned::new("n", 1_u8));
    let forwarded = owned("n", 1_u8);

    let mut a = direct;
    let mut b = forwarded;
    assert_eq!(a.name(), b.name());
    assert_eq!(a.value_type(), b.value_type());
    assert_eq!(
        a.address().downcast_mut::<u8>(),
        b.address().downcast_mut::<u8>()
    );
}
