//! crates/what-sink/src/output.rs
//! Process-wide destination for debug lines.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SinkError;
use crate::sink::LineSink;

enum Destination {
    Stderr,
    Writer(Box<dyn Write + Send>),
    #[cfg(feature = "tracing")]
    Tracing,
}

static DESTINATION: Mutex<Destination> = Mutex::new(Destination::Stderr);

fn destination() -> MutexGuard<'static, Destination> {
    DESTINATION.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Routes subsequent lines to standard error. This is the initial state.
pub fn use_stderr() {
    *destination() = Destination::Stderr;
}

/// Routes subsequent lines to `writer`, replacing the current destination.
///
/// ```
/// use std::io::sink;
///
/// what_sink::set_writer(sink());
/// what_sink::emit("app", "discarded").unwrap();
/// what_sink::use_stderr();
/// ```
pub fn set_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    *destination() = Destination::Writer(Box::new(writer));
}

/// Routes subsequent lines to the installed `tracing` subscriber.
///
/// Lines become DEBUG events with target `what`; the subscriber supplies its
/// own timestamp.
#[cfg(feature = "tracing")]
pub fn use_tracing() {
    *destination() = Destination::Tracing;
}

/// Writes one rendered body to the current destination.
///
/// `module` names the originating module of the call site. Line-oriented
/// destinations already carry it inside `body`; the tracing destination
/// records it as a separate field.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn emit(module: &str, body: &str) -> Result<(), SinkError> {
    let mut destination = destination();
    match &mut *destination {
        Destination::Stderr => LineSink::new(io::stderr().lock()).write_line(body),
        Destination::Writer(writer) => LineSink::new(writer.as_mut()).write_line(body),
        #[cfg(feature = "tracing")]
        Destination::Tracing => {
            crate::tracing_bridge::emit(module, body);
            Ok(())
        }
    }
}
