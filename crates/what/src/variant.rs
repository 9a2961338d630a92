//! crates/what/src/variant.rs
//! Compile-time build variant: which macro groups were compiled active.
//!
//! The switch itself is the pair of `#[cfg]`-selected definitions of every
//! macro in `macros.rs`. This module only mirrors that resolution as `const`
//! values so programs and tests can report which variant they were built as.

use std::fmt;

/// A group of call-site macros sharing one cargo feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// [`happens!`](crate::happens) and [`happens_if!`](crate::happens_if).
    Happens,
    /// [`is!`](crate::is).
    Is,
    /// [`func!`](crate::func).
    Func,
    /// [`package!`](crate::package).
    Package,
}

impl Group {
    /// Every group, in declaration order.
    pub const ALL: [Self; 4] = [Self::Happens, Self::Is, Self::Func, Self::Package];

    /// Cargo feature enabling this group on its own.
    #[must_use]
    pub const fn feature(self) -> &'static str {
        match self {
            Self::Happens => "whathappens",
            Self::Is => "whatis",
            Self::Func => "whatfunc",
            Self::Package => "whatpackage",
        }
    }

    /// Macros belonging to this group.
    #[must_use]
    pub const fn macros(self) -> &'static [&'static str] {
        match self {
            Self::Happens => &["happens", "happens_if"],
            Self::Is => &["is"],
            Self::Func => &["func"],
            Self::Package => &["package"],
        }
    }

    /// Whether the group was compiled active: the master `what` feature or
    /// the group's own feature is enabled.
    #[must_use]
    pub const fn is_active(self) -> bool {
        match self {
            Self::Happens => cfg!(any(feature = "what", feature = "whathappens")),
            Self::Is => cfg!(any(feature = "what", feature = "whatis")),
            Self::Func => cfg!(any(feature = "what", feature = "whatfunc")),
            Self::Package => cfg!(any(feature = "what", feature = "whatpackage")),
        }
    }
}

/// Snapshot of the active groups of this build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildVariant {
    happens: bool,
    is: bool,
    func: bool,
    package: bool,
}

impl BuildVariant {
    /// The variant this crate was compiled as.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            happens: Group::Happens.is_active(),
            is: Group::Is.is_active(),
            func: Group::Func.is_active(),
            package: Group::Package.is_active(),
        }
    }

    /// Whether `group` is active in this variant.
    #[must_use]
    pub const fn is_active(self, group: Group) -> bool {
        match group {
            Group::Happens => self.happens,
            Group::Is => self.is,
            Group::Func => self.func,
            Group::Package => self.package,
        }
    }

    /// True when no group is active.
    #[must_use]
    pub const fn is_inert(self) -> bool {
        !(self.happens || self.is || self.func || self.package)
    }

    /// True when every group is active.
    #[must_use]
    pub const fn is_fully_active(self) -> bool {
        self.happens && self.is && self.func && self.package
    }

    /// Iterates over the active groups.
    pub fn active_groups(self) -> impl Iterator<Item = Group> {
        Group::ALL
            .into_iter()
            .filter(move |group| self.is_active(*group))
    }
}

impl fmt::Display for BuildVariant {
    /// Lists the active features, or `inert` when none is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inert() {
            return f.write_str("inert");
        }
        let mut first = true;
        for group in self.active_groups() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(group.feature())?;
            first = false;
        }
        Ok(())
    }
}
