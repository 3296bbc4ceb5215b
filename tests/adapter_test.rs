//! Dispatch and introspection through a single adapter

use std::any::TypeId;

use metafield::prelude::*;

#[derive(Operation)]
#[operation(output = i32)]
struct Increment;

impl Process<i32> for Increment {
    fn process(&mut self, value: &mut i32) -> i32 {
        *value += 1;
        *value
    }
}

#[derive(Operation)]
#[operation(output = String)]
struct Describe;

impl Process<char> for Describe {
    fn process(&mut self, value: &mut char) -> String {
        format!("char:{}", value)
    }
}

interface! {
    trait Counter: [Increment];
}

interface! {
    trait Described: [Describe];
}

#[test]
fn test_increment_mutates_in_place() {
    let mut field = owned("value1", 0_i32);
    let view: &mut dyn Counter = &mut field;

    let mut inc = Increment;
    assert_eq!(view.dispatch(&mut inc), 1);
    assert_eq!(view.address().downcast_mut::<i32>(), Some(&mut 1));
    assert_eq!(view.dispatch(&mut inc), 2);
    assert_eq!(view.address().downcast_mut::<i32>(), Some(&mut 2));

    assert_eq!(field.into_inner().into_value(), 2);
}

#[test]
fn test_describe_reads_value_and_identity() {
    let mut field = owned("value2", 'A');
    let view: &mut dyn Described = &mut field;

    let mut describe = Describe;
    assert_eq!(view.dispatch(&mut describe), "char:A");
    assert_eq!(view.value_type(), TypeId::of::<char>());
    assert_eq!(view.name(), "value2");
}

#[test]
fn test_value_type_is_stable_and_distinct() {
    let mut int_field = owned("a", 5_i32);
    let mut char_field = owned("b", 'b');

    assert_eq!(int_field.value_type(), int_field.value_type());
    assert_eq!(int_field.value_type(), TypeId::of::<i32>());
    assert_ne!(int_field.value_type(), char_field.value_type());

    // The erased address agrees with the reported identity.
    assert_eq!(int_field.address().type_id(), int_field.value_type());
    assert_eq!(char_field.address().type_id(), TypeId::of::<char>());
}

#[test]
fn test_name_never_changes() {
    let mut field = owned("steady", 0_i32);
    let before = field.name();

    let mut inc = Increment;
    field.dispatch(&mut inc);
    field.dispatch(&mut inc);

    assert_eq!(field.name(), before);
    assert_eq!(field.name(), "steady");
}

#[test]
fn test_dispatch_result_matches_direct_process() {
    let mut adapter = owned("direct", 10_i32);
    let mut plain = 10_i32;

    let mut inc = Increment;
    let via_adapter = adapter.dispatch(&mut inc);
    let direct = inc.process(&mut plain);

    assert_eq!(via_adapter, direct);
}
