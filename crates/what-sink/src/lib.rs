#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/what-sink/src/lib.rs
//!
//! # Overview
//!
//! `what-sink` is the write half of the `what` debug logger. It knows nothing
//! about build variants, call sites or package filtering; it receives an
//! already rendered body and writes it as a single timestamped line to the
//! process-wide destination.
//!
//! # Design
//!
//! The crate exposes [`LineSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor that prefixes each body with a
//! `YYYY/MM/DD HH:MM:SS` stamp and terminates it with a newline. The
//! process-wide destination (stderr by default) is selected with
//! [`use_stderr`], [`set_writer`] or, with the `tracing` feature,
//! [`use_tracing`]. [`emit`] serializes writers behind a mutex so lines from
//! concurrent threads never interleave within a line.
//!
//! # Invariants
//!
//! - Each body is written with a single `write_all` call followed by a flush.
//! - A body that already ends with a newline is not given a second one.
//! - A poisoned destination lock is recovered rather than propagated; a panic
//!   in one logging thread never silences the others.
//!
//! # Errors
//!
//! Sink operations return [`SinkError`]. Callers on the logging hot path
//! discard it: debug output is best effort and must not disturb the program
//! being debugged.
//!
//! # Examples
//!
//! ```
//! use what_sink::LineSink;
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_line("my_app.main: connecting").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.ends_with(" my_app.main: connecting\n"));
//! ```
//!
//! # See also
//!
//! - the `what` crate for the call-site macros that feed this sink.

mod error;
mod output;
mod sink;
pub mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use error::SinkError;
#[cfg(feature = "tracing")]
pub use output::use_tracing;
pub use output::{emit, set_writer, use_stderr};
pub use sink::LineSink;
