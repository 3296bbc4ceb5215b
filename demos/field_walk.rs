//! Walk a heterogeneous set of fields behind one synthesized interface.
//!
//! Mirrors the crate's intended client protocol: build one adapter per
//! field, erase to the shared interface, then run each operation across
//! the whole collection.
//!
//! ```sh
//! cargo run --example field_walk
//! ```

use std::any::TypeId;

use metafield::fields;
use metafield::prelude::*;

/// Render a field value as text; supports i32, char and bool.
#[derive(Operation)]
#[operation(output = String)]
struct Show;

impl Process<i32> for Show {
    fn process(&mut self, value: &mut i32) -> String {
        format!("i32 {value}")
    }
}

impl Process<char> for Show {
    fn process(&mut self, value: &mut char) -> String {
        format!("char {value}")
    }
}

impl Process<bool> for Show {
    fn process(&mut self, value: &mut bool) -> String {
        format!("bool {value}")
    }
}

/// Nudge a field: increments numbers, advances characters.
#[derive(Operation)]
#[operation(output = ())]
struct Nudge;

impl Process<i32> for Nudge {
    fn process(&mut self, value: &mut i32) {
        *value += 1;
    }
}

impl Process<char> for Nudge {
    fn process(&mut self, value: &mut char) {
        *value = ((*value as u8) + 1) as char;
    }
}

impl Process<bool> for Nudge {
    fn process(&mut self, value: &mut bool) {
        *value = !*value;
    }
}

interface! {
    /// Everything the walker needs from a field.
    pub trait FieldView: [Show, Nudge];
}

fn type_label(id: TypeId) -> &'static str {
    if id == TypeId::of::<i32>() {
        "i32"
    } else if id == TypeId::of::<char>() {
        "char"
    } else if id == TypeId::of::<bool>() {
        "bool"
    } else {
        "?"
    }
}

fn main() {
    let slot: &'static mut char = Box::leak(Box::new('C'));

    let mut collection = fields![FieldView =>
        owned("value1", 0_i32),
        owned("value2", 'A'),
        global("value3", slot),
        owned("value4", true),
    ];

    let mut show = Show;
    let mut nudge = Nudge;

    for pass in 1..=2 {
        println!("pass {pass}:");
        for handle in &mut collection {
            handle.dispatch(&mut nudge);
            println!(
                "  {:<8} [{:<4}] -> {}",
                handle.name(),
                type_label(handle.value_type()),
                handle.dispatch(&mut show),
            );
        }
    }
}
