//! Exported convenience macros for the client iteration protocol.
//!
//! The caller keeps a collection of handles typed as one shared
//! interface but backed by heterogeneous adapters; `fields!` builds
//! that collection.

/// Build a heterogeneous field collection behind one interface.
///
/// Expands to a `Vec<Box<dyn $iface>>`; each adapter expression is
/// boxed and erased to the interface.
///
/// ```ignore
/// let mut collection = fields![FieldView =>
///     owned("value1", 0_i32),
///     owned("value2", 'A'),
/// ];
///
/// for handle in &mut collection {
///     handle.dispatch(&mut op);
/// }
/// ```
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! fields {
    ($iface:path $(,)?) => {
        $crate::__private::Vec::<$crate::__private::Box<dyn $iface>>::new()
    };
    ($iface:path => $($adapter:expr),+ $(,)?) => {{
        let mut collection: $crate::__private::Vec<$crate::__private::Box<dyn $iface>> =
            $crate::__private::Vec::new();
        $(
            collection.push($crate::__private::Box::new($adapter)
                as $crate::__private::Box<dyn $iface>);
        )+
        collection
    }};
}

// =============================================================================
// Tests
// =============================================================================
