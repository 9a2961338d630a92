//! crates/what/src/filter.rs
//! Module allow-list read from the `WHAT` environment variable.
//!
//! The process-wide filter moves from uninitialized to initialized exactly
//! once, on the first active call site or an explicit [`init`]. Changing
//! `WHAT` afterwards has no effect until the process restarts.

use std::env;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Environment variable holding the comma-separated module allow-list.
pub const ENV_VAR: &str = "WHAT";

static GLOBAL: OnceLock<PackageFilter> = OnceLock::new();

/// Set of module identifiers permitted to produce debug output.
///
/// An empty filter admits every module.
///
/// ```
/// use what::PackageFilter;
///
/// let filter = PackageFilter::parse("my_app::net, my_app::db,,");
/// assert!(filter.is_allowed("my_app::net"));
/// assert!(!filter.is_allowed("my_app"));
/// assert!(PackageFilter::default().is_allowed("anything"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageFilter {
    modules: FxHashSet<String>,
}

impl PackageFilter {
    /// Parses a comma-separated list. Entries are trimmed; empty entries are
    /// dropped.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value.split(',').collect()
    }

    /// Builds the filter from [`ENV_VAR`]. An unset, empty or non-UTF-8
    /// variable yields the admit-everything filter.
    #[must_use]
    pub fn from_env() -> Self {
        env::var(ENV_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// True if the filter is empty or contains `module`.
    #[must_use]
    pub fn is_allowed(&self, module: &str) -> bool {
        self.modules.is_empty() || self.modules.contains(module)
    }

    /// True if the filter restricts output at all.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Number of module identifiers in the allow-list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True if the allow-list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module identifiers in the allow-list, sorted.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.modules.iter().map(String::as_str).collect();
        modules.sort_unstable();
        modules
    }
}

impl<'a> FromIterator<&'a str> for PackageFilter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let modules = iter
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();
        Self { modules }
    }
}

/// Initializes the process-wide filter from the environment if that has not
/// happened yet, and returns it.
///
/// Call this early in `main` to pin the filter before any thread could change
/// the environment; otherwise the first active call site does it. The first
/// call also captures the local time offset for line stamps, which on Unix
/// only works while the process is still single-threaded.
pub fn init() -> &'static PackageFilter {
    GLOBAL.get_or_init(|| {
        what_sink::timestamp::capture_local_offset();
        PackageFilter::from_env()
    })
}

/// Whether the process-wide filter has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Queries the process-wide filter, initializing it on first use.
#[must_use]
pub fn is_allowed(module: &str) -> bool {
    init().is_allowed(module)
}
