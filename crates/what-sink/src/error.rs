//! crates/what-sink/src/error.rs
//! Error type shared by the sink operations.

use std::io;

use thiserror::Error;

/// Failure while writing a debug line.
///
/// Timestamp rendering never fails a line: an unrenderable time is replaced
/// by [`FALLBACK`](crate::timestamp::FALLBACK).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination writer rejected the line.
    #[error("failed to write debug line: {0}")]
    Io(#[from] io::Error),
}
