//! crates/what/src/dump.rs
//! Structural dump used by [`is!`](crate::is).

use std::any;
use std::fmt;

/// Renders `value` as `(<type name>) <pretty Debug>`.
///
/// Nested fields come out one per line with their names; absent values in
/// `Option` fields print as `None`. The output depends only on the value, so
/// dumping an unchanged value twice yields identical text.
///
/// ```
/// #[derive(Debug)]
/// struct Client {
///     timeout_secs: u64,
///     jar: Option<String>,
/// }
///
/// let dump = what::dump::render(&Client { timeout_secs: 10, jar: None });
/// assert!(dump.contains("Client) Client {"));
/// assert!(dump.contains("jar: None"));
/// ```
#[must_use]
pub fn render<T>(value: &T) -> String
where
    T: fmt::Debug + ?Sized,
{
    format!("({}) {value:#?}", any::type_name::<T>())
}
