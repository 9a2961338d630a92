//! crates/what/src/caller.rs
//! Identity of the call site that invoked a debug macro.
//!
//! Identity is captured where the macro expands, not by walking the stack:
//! [`caller!`](crate::caller) records `module_path!()`, `file!()` and
//! `line!()` and declares a marker function whose type name spells out the
//! path of the enclosing function.

use std::fmt;

/// Placeholder for any identity component that cannot be derived.
pub const UNKNOWN: &str = "unknown";

/// Trailing path segment contributed by the marker function of `caller!`.
const MARKER_SUFFIX: &str = "::__what_here";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Module, function, file and line of a call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Caller {
    module: &'static str,
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl Caller {
    /// Builds an identity from the raw values captured at a call site.
    ///
    /// `marker_path` is the type name of the marker function declared inside
    /// the calling function. Components that are empty or unrecognised become
    /// [`UNKNOWN`].
    #[must_use]
    pub fn resolve(
        module: &'static str,
        marker_path: &'static str,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            module: or_unknown(module),
            function: function_name(module, marker_path),
            file: or_unknown(file),
            line,
        }
    }

    /// Module path of the call site, the key used by the package filter.
    #[must_use]
    pub const fn module(&self) -> &'static str {
        self.module
    }

    /// Name of the enclosing function relative to its module, for example
    /// `main` or `Client::connect`.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source file of the call site.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Caller {
    /// Formats as `<module>.<function>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.function)
    }
}

fn or_unknown(value: &'static str) -> &'static str {
    if value.is_empty() { UNKNOWN } else { value }
}

/// Derives the enclosing function's name from the marker's type path.
///
/// Closure segments are folded into the function that defines them and the
/// module prefix is removed. Paths outside the module (trait impls render
/// as `<Type as Trait>::method`) are kept whole.
fn function_name(module: &str, marker_path: &'static str) -> &'static str {
    let Some(mut path) = marker_path.strip_suffix(MARKER_SUFFIX) else {
        return UNKNOWN;
    };
    while let Some(outer) = path.strip_suffix(CLOSURE_SUFFIX) {
        path = outer;
    }
    let function = path
        .strip_prefix(module)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(path);
    or_unknown(function)
}
