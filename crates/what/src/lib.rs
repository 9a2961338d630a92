#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `what` provides debug logging for developers only. Its macros exist in a
//! binary only when a cargo feature asks for them; without one they expand
//! to nothing that survives compilation, so debug output (and whatever it
//! could leak) never reaches a production build. Info-level output for users
//! belongs to the application's regular logger.
//!
//! | Macro | Feature | Writes |
//! |---|---|---|
//! | [`happens!`] | `whathappens` | `<timestamp> <module>.<function>: <message>` |
//! | [`happens_if!`] | `whathappens` | the same, when a condition holds |
//! | [`is!`] | `whatis` | `<timestamp> (<type>) <pretty Debug dump>` |
//! | [`func!`] | `whatfunc` | `<timestamp> Func <module>.<function> in line <N> of file <path>` |
//! | [`package!`] | `whatpackage` | `<timestamp> <module>` |
//!
//! The `what` feature enables all of them. Features combine additively.
//!
//! # Design
//!
//! Each macro has two `#[cfg]`-selected definitions. The active one captures
//! the call site (see [`Caller`]), asks the process-wide [`PackageFilter`]
//! whether the caller's module may log, renders the body and hands it to the
//! `what-sink` destination, which prefixes the timestamp. The inert one only
//! type-checks its arguments inside `if false`.
//!
//! # Invariants
//!
//! - Inert macros evaluate none of their arguments.
//! - The package filter is read from `WHAT` once per process; see [`init`].
//! - Logging never panics or returns an error to the caller.
//!
//! # Examples
//!
//! ```
//! #[derive(Debug)]
//! struct Request {
//!     url: &'static str,
//!     retries: u8,
//! }
//!
//! let request = Request { url: "https://example.org", retries: 0 };
//!
//! what::func!();
//! what::happens!("Connecting to {}", request.url);
//! what::is!(request);
//! what::happens_if!(request.retries == 0, "first attempt");
//! ```
//!
//! Build with `--features what` (or a group feature) and optionally restrict
//! output to some modules:
//!
//! ```sh
//! WHAT=my_app::net,my_app::db cargo run --features what
//! ```

mod caller;
pub mod dump;
mod filter;
mod macros;
pub mod record;
mod variant;

pub use caller::{Caller, UNKNOWN};
pub use filter::{ENV_VAR, PackageFilter, init, is_allowed, is_initialized};
pub use variant::{BuildVariant, Group};
#[cfg(feature = "tracing")]
pub use what_sink::use_tracing;
pub use what_sink::{LineSink, SinkError, set_writer, use_stderr};

#[doc(hidden)]
pub mod __private {
    /// Type name of the argument's type; applied to the marker fn item of
    /// [`caller!`](crate::caller).
    #[must_use]
    pub fn type_name_of<T>(_: T) -> &'static str {
        core::any::type_name::<T>()
    }

    /// Holds inert [`is!`](crate::is) call sites to the `Debug` bound of the
    /// active variant.
    #[inline]
    pub const fn assert_debug<T: core::fmt::Debug + ?Sized>(_: &T) {}
}
