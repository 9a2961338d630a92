//! crates/what-sink/src/tracing_bridge.rs
//! Bridge from debug lines to the `tracing` ecosystem.
//!
//! Applications that already install a `tracing` subscriber can select this
//! destination with [`use_tracing`](crate::use_tracing). Each body becomes a
//! DEBUG event with target [`WHAT_TARGET`] and a `module` field naming the
//! originating module, so existing `EnvFilter` directives such as
//! `what=debug` apply to it.
//!
//! # Usage
//!
//! ```rust,ignore
//! tracing_subscriber::fmt().with_env_filter("what=debug").init();
//! what_sink::use_tracing();
//! ```

/// Target name for bridged events.
pub(crate) const WHAT_TARGET: &str = "what";

/// Emits `body` as a tracing event.
#[inline]
pub(crate) fn emit(module: &str, body: &str) {
    tracing::debug!(
        target: WHAT_TARGET,
        module = %module,
        "{}",
        body.trim_end_matches('\n')
    );
}
