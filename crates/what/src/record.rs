//! crates/what/src/record.rs
//! Active bodies of the call-site macros.
//!
//! Active macro variants expand to calls into this module; inert variants
//! never reference it, so nothing here reaches a binary built without the
//! `what*` features. Every entry point consults the package filter before
//! rendering, so filtered call sites skip formatting entirely. Write failures
//! are dropped: debug output is best effort.

use std::fmt;
use std::io::Write;

use what_sink::{LineSink, SinkError};

use crate::caller::Caller;
use crate::dump;
use crate::filter::{self, PackageFilter};

/// Body of a [`happens!`](crate::happens) line: `<module>.<function>: <message>`.
#[must_use]
pub fn happening(caller: &Caller, message: fmt::Arguments<'_>) -> String {
    format!("{caller}: {message}")
}

/// Body of a [`func!`](crate::func) line.
#[must_use]
pub fn func_report(caller: &Caller) -> String {
    format!(
        "Func {caller} in line {} of file {}",
        caller.line(),
        caller.file()
    )
}

/// Body of a [`package!`](crate::package) line.
#[must_use]
pub fn package_report(caller: &Caller) -> String {
    caller.module().to_owned()
}

/// Writes the body produced by `render` to `sink` if `filter` admits the
/// caller's module. Returns whether a line was written.
pub fn deliver_to<W, F>(
    filter: &PackageFilter,
    sink: &mut LineSink<W>,
    caller: &Caller,
    render: F,
) -> Result<bool, SinkError>
where
    W: Write,
    F: FnOnce() -> String,
{
    if !filter.is_allowed(caller.module()) {
        return Ok(false);
    }
    sink.write_line(&render())?;
    Ok(true)
}

/// Like [`deliver_to`], against the process-wide filter and destination.
pub fn deliver<F>(caller: &Caller, render: F) -> Result<bool, SinkError>
where
    F: FnOnce() -> String,
{
    if !filter::is_allowed(caller.module()) {
        return Ok(false);
    }
    what_sink::emit(caller.module(), &render())?;
    Ok(true)
}

/// Active body of [`happens!`](crate::happens) and
/// [`happens_if!`](crate::happens_if).
pub fn happens(caller: &Caller, message: fmt::Arguments<'_>) {
    let _ = deliver(caller, || happening(caller, message));
}

/// Active body of [`is!`](crate::is).
pub fn is<T>(caller: &Caller, value: &T)
where
    T: fmt::Debug + ?Sized,
{
    let _ = deliver(caller, || dump::render(value));
}

/// Active body of [`func!`](crate::func).
pub fn func(caller: &Caller) {
    let _ = deliver(caller, || func_report(caller));
}

/// Active body of [`package!`](crate::package).
pub fn package(caller: &Caller) {
    let _ = deliver(caller, || package_report(caller));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn caller(module: &'static str, function_path: &'static str) -> Caller {
        Caller::resolve(module, function_path, "src/lib.rs", 42)
    }

    fn is_stamp(text: &str) -> bool {
        let bytes = text.as_bytes();
        bytes.len() == 19
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'/',
                10 => *b == b' ',
                13 | 16 => *b == b':',
                _ => b.is_ascii_digit(),
            })
    }

    #[test]
    fn happening_qualifies_with_module_and_function() {
        let site = caller("app::net", "app::net::connect::__what_here");
        assert_eq!(
            happening(&site, format_args!("x={}", 5)),
            "app::net.connect: x=5"
        );
    }

    #[test]
    fn func_report_names_function_line_and_file() {
        let site = caller("app", "app::main::__what_here");
        assert_eq!(func_report(&site), "Func app.main in line 42 of file src/lib.rs");
    }

    #[test]
    fn package_report_is_the_module() {
        let site = caller("app::db", "app::db::open::__what_here");
        assert_eq!(package_report(&site), "app::db");
    }

    #[test]
    fn filtered_module_writes_nothing_and_skips_rendering() {
        let filter = PackageFilter::parse("pkgA");
        let mut sink = LineSink::new(Vec::new());
        let rendered = Cell::new(false);

        let written = deliver_to(&filter, &mut sink, &caller("pkgB", "pkgB::run::__what_here"), || {
            rendered.set(true);
            "hi".to_owned()
        })
        .expect("deliver succeeds");

        assert!(!written);
        assert!(!rendered.get());
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn admitted_module_writes_one_stamped_line() {
        let filter = PackageFilter::parse("pkgA");
        let mut sink = LineSink::new(Vec::new());
        let site = caller("pkgA", "pkgA::run::__what_here");

        let written = deliver_to(&filter, &mut sink, &site, || {
            happening(&site, format_args!("hi"))
        })
        .expect("deliver succeeds");

        assert!(written);
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), 1);
        let (stamp, rest) = output.split_at(19);
        assert!(is_stamp(stamp), "{output}");
        assert_eq!(rest, " pkgA.run: hi\n");
    }

    #[test]
    fn empty_filter_admits_every_module() {
        let filter = PackageFilter::default();
        let mut sink = LineSink::new(Vec::new());
        for module in ["a", "b::c", "pkgC"] {
            let site = caller(module, "x::f::__what_here");
            assert!(deliver_to(&filter, &mut sink, &site, || package_report(&site)).expect("deliver"));
        }
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn dump_block_keeps_all_lines_together() {
        let filter = PackageFilter::default();
        let mut sink = LineSink::new(Vec::new());
        let site = caller("app", "app::main::__what_here");

        deliver_to(&filter, &mut sink, &site, || dump::render(&Some((1, "one"))))
            .expect("deliver succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert!(output[20..].starts_with("(core::option::Option<(i32, &str)>) Some(\n"), "{output}");
        assert!(output.ends_with(")\n"));
    }
}
