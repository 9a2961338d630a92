//! crates/what-sink/src/sink.rs
//! Timestamped line writer.

use std::io::Write;

use time::OffsetDateTime;

use crate::error::SinkError;
use crate::timestamp;

/// Writes rendered debug bodies as `<timestamp> <body>` lines.
///
/// The sink owns its writer. Each call renders the full line into one buffer
/// and hands it to the writer with a single `write_all`, so a writer that is
/// shared behind a lock (or a line-buffered stream) receives whole lines.
///
/// # Examples
///
/// ```
/// use what_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("app::net.connect: dialing")?;
/// sink.write_line("(u8) 7\n")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), what_sink::SinkError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineSink<W> {
    writer: W,
}

impl<W> LineSink<W> {
    /// Creates a sink that writes into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `body` stamped with the current time.
    pub fn write_line(&mut self, body: &str) -> Result<(), SinkError> {
        self.write_line_at(timestamp::now(), body)
    }

    /// Writes `body` stamped with `at`.
    pub fn write_line_at(&mut self, at: OffsetDateTime, body: &str) -> Result<(), SinkError> {
        let line = compose(&timestamp::format_or_fallback(at), body);
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

fn compose(stamp: &str, body: &str) -> String {
    let mut line = String::with_capacity(stamp.len() + body.len() + 2);
    line.push_str(stamp);
    line.push(' ');
    line.push_str(body);
    if !body.ends_with('\n') {
        line.push('\n');
    }
    line
}
