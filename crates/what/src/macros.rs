//! crates/what/src/macros.rs
//! The call-site macros, each defined twice behind `#[cfg]`.
//!
//! The active definition captures the caller and calls into
//! [`record`](crate::record). The inert definition keeps the same syntax and
//! type-checks its arguments inside `if false`, so call sites compile the
//! same in every variant while no argument is evaluated and no code
//! survives constant folding.

/// Captures the [`Caller`](crate::Caller) of the enclosing call site.
///
/// ```
/// fn connect() -> what::Caller {
///     what::caller!()
/// }
///
/// let caller = connect();
/// assert!(caller.function().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! caller {
    () => {{
        fn __what_here() {}
        $crate::Caller::resolve(
            ::core::module_path!(),
            $crate::__private::type_name_of(__what_here),
            ::core::file!(),
            ::core::line!(),
        )
    }};
}

/// Writes `<timestamp> <module>.<function>: <message>`.
///
/// Takes the same arguments as [`format!`].
#[cfg(any(feature = "what", feature = "whathappens"))]
#[macro_export]
macro_rules! happens {
    ($($arg:tt)+) => {
        $crate::record::happens(&$crate::caller!(), ::core::format_args!($($arg)+))
    };
}

/// Writes `<timestamp> <module>.<function>: <message>`.
///
/// Inert in this build: enable the `what` or `whathappens` feature.
#[cfg(not(any(feature = "what", feature = "whathappens")))]
#[macro_export]
macro_rules! happens {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

/// Like [`happens!`](crate::happens), but only when the condition is true.
///
/// The message arguments are not evaluated when the condition is false.
#[cfg(any(feature = "what", feature = "whathappens"))]
#[macro_export]
macro_rules! happens_if {
    ($condition:expr, $($arg:tt)+) => {
        if $condition {
            $crate::happens!($($arg)+)
        }
    };
}

/// Like [`happens!`](crate::happens), but only when the condition is true.
///
/// Inert in this build: enable the `what` or `whathappens` feature.
#[cfg(not(any(feature = "what", feature = "whathappens")))]
#[macro_export]
macro_rules! happens_if {
    ($condition:expr, $($arg:tt)+) => {
        if false {
            let _: bool = $condition;
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

/// Dumps a value's type and `{:#?}` rendering as one block.
///
/// Only the top-level type is named. Nested fields appear with their names
/// and values as `{:#?}` prints them, but without their types, since Rust
/// has no runtime reflection to recover them.
///
/// The value must implement [`Debug`](core::fmt::Debug) in every build, so
/// enabling `whatis` never breaks a call site that compiled without it:
///
/// ```compile_fail,E0277
/// struct Opaque;
///
/// what::is!(Opaque);
/// ```
#[cfg(any(feature = "what", feature = "whatis"))]
#[macro_export]
macro_rules! is {
    ($value:expr $(,)?) => {
        $crate::record::is(&$crate::caller!(), &$value)
    };
}

/// Dumps a value's type and `{:#?}` rendering as one block.
///
/// Only the top-level type is named; nested fields show names and values
/// but not types.
///
/// Inert in this build: enable the `what` or `whatis` feature. The value
/// must still implement [`Debug`](core::fmt::Debug):
///
/// ```compile_fail,E0277
/// struct Opaque;
///
/// what::is!(Opaque);
/// ```
#[cfg(not(any(feature = "what", feature = "whatis")))]
#[macro_export]
macro_rules! is {
    ($value:expr $(,)?) => {
        if false {
            $crate::__private::assert_debug(&$value);
        }
    };
}

/// Writes `Func <module>.<function> in line <N> of file <path>`.
#[cfg(any(feature = "what", feature = "whatfunc"))]
#[macro_export]
macro_rules! func {
    () => {
        $crate::record::func(&$crate::caller!())
    };
}

/// Writes `Func <module>.<function> in line <N> of file <path>`.
///
/// Inert in this build: enable the `what` or `whatfunc` feature.
#[cfg(not(any(feature = "what", feature = "whatfunc")))]
#[macro_export]
macro_rules! func {
    () => {
        ()
    };
}

/// Writes the module path of the call site.
#[cfg(any(feature = "what", feature = "whatpackage"))]
#[macro_export]
macro_rules! package {
    () => {
        $crate::record::package(&$crate::caller!())
    };
}

/// Writes the module path of the call site.
///
/// Inert in this build: enable the `what` or `whatpackage` feature.
#[cfg(not(any(feature = "what", feature = "whatpackage")))]
#[macro_export]
macro_rules! package {
    () => {
        ()
    };
}
