//! Integration tests for the fully active build (`--features what`).
//!
//! Output is captured through `what::set_writer`. These tests need `WHAT`
//! unset so the filter admits every module; they refuse to run otherwise.
#![cfg(feature = "what")]

use std::cell::Cell;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use serial_test::serial;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn install() -> Self {
        assert!(
            !what::init().is_filtering(),
            "unset {} to run these tests; it restricts output to {:?}",
            what::ENV_VAR,
            what::init().modules()
        );
        let captured = Self::default();
        what::set_writer(captured.clone());
        captured
    }

    fn finish(self) -> String {
        what::use_stderr();
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8")
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Removes the `YYYY/MM/DD HH:MM:SS ` prefix of a line.
fn body(line: &str) -> &str {
    let (stamp, rest) = line.split_at(20);
    assert_eq!(&stamp[4..5], "/", "missing timestamp: {line}");
    assert_eq!(&stamp[19..], " ", "missing timestamp: {line}");
    rest
}

// ============================================================================
// happens! / happens_if!
// ============================================================================

/// Verifies the `<module>.<function>: <message>` layout.
#[test]
#[serial]
fn happens_writes_qualified_line() {
    let captured = Captured::install();
    what::happens!("Connecting to {}", "https://example.org");
    let output = captured.finish();

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        body(lines[0]),
        "active_output.happens_writes_qualified_line: Connecting to https://example.org"
    );
}

/// Verifies that inline format captures work through the macro.
#[test]
#[serial]
fn happens_supports_captured_identifiers() {
    let captured = Captured::install();
    let seconds = 10.0;
    what::happens!("Client has a {seconds} seconds timeout");
    let output = captured.finish();

    assert!(output.ends_with(": Client has a 10 seconds timeout\n"), "{output}");
}

/// Verifies that a false condition produces no line.
#[test]
#[serial]
fn happens_if_false_is_silent() {
    let captured = Captured::install();
    what::happens_if!(false, "msg");
    assert!(captured.finish().is_empty());
}

/// Verifies that a true condition produces exactly one formatted line.
#[test]
#[serial]
fn happens_if_true_writes_one_line() {
    let captured = Captured::install();
    what::happens_if!(true, "x={}", 5);
    let output = captured.finish();

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("x=5"));
}

/// Verifies that message arguments are skipped when the condition is false.
#[test]
#[serial]
fn happens_if_false_skips_message_arguments() {
    let counter = Cell::new(0);
    let touch = || {
        counter.set(counter.get() + 1);
        counter.get()
    };

    let captured = Captured::install();
    what::happens_if!(false, "{}", touch());
    what::happens_if!(true, "{}", touch());
    let output = captured.finish();

    assert_eq!(counter.get(), 1);
    assert!(output.ends_with(": 1\n"));
}

// ============================================================================
// is!
// ============================================================================

#[derive(Debug)]
struct Client {
    timeout_secs: u64,
    jar: Option<Vec<String>>,
}

/// Verifies the dump layout.
#[test]
#[serial]
fn is_dumps_type_and_fields() {
    let client = Client {
        timeout_secs: 10,
        jar: None,
    };

    let captured = Captured::install();
    what::is!(client);
    let output = captured.finish();

    assert!(
        body(&output).starts_with("(active_output::Client) Client {\n"),
        "{output}"
    );
    assert!(output.contains("    timeout_secs: 10,\n"));
    assert!(output.contains("    jar: None,\n"));
    assert!(output.ends_with("}\n"));
}

/// Verifies that dumping an unchanged value twice yields identical blocks.
#[test]
#[serial]
fn is_is_idempotent_on_unchanged_values() {
    let client = Client {
        timeout_secs: 3,
        jar: Some(vec!["session".to_owned()]),
    };

    let first = Captured::install();
    what::is!(client);
    let first = first.finish();

    let second = Captured::install();
    what::is!(client);
    let second = second.finish();

    assert_eq!(body(&first), body(&second));
}

// ============================================================================
// func! / package!
// ============================================================================

/// Verifies the function, line and file report.
#[test]
#[serial]
fn func_reports_function_line_and_file() {
    let captured = Captured::install();
    let line = line!() + 1;
    what::func!();
    let output = captured.finish();

    let expected = format!(
        "Func active_output.func_reports_function_line_and_file in line {line} of file "
    );
    assert!(body(&output).starts_with(&expected), "{output}");
    assert!(output.trim_end().ends_with("active_output.rs"));
}

/// Verifies that package! writes the module path.
#[test]
#[serial]
fn package_reports_module_path() {
    let captured = Captured::install();
    what::package!();
    nested::report();
    let output = captured.finish();

    let bodies: Vec<_> = output.lines().map(body).collect();
    assert_eq!(bodies, ["active_output", "active_output::nested"]);
}

mod nested {
    pub fn report() {
        what::package!();
    }
}

// ============================================================================
// Concurrency
// ============================================================================

/// Verifies that lines from concurrent threads are never interleaved.
#[test]
#[serial]
fn concurrent_callers_write_whole_lines() {
    let captured = Captured::install();
    let workers: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                for n in 0..25 {
                    what::happens!("worker={worker} n={n}");
                }
            })
        })
        .collect();
    for handle in workers {
        handle.join().expect("worker finished");
    }
    let output = captured.finish();

    assert_eq!(output.lines().count(), 100);
    for line in output.lines() {
        assert!(body(line).contains(": worker="), "{line}");
    }
}

/// Verifies the build variant.
#[test]
fn variant_is_fully_active() {
    let variant = what::BuildVariant::current();
    assert!(variant.is_fully_active());
    assert_eq!(
        variant.to_string(),
        "whathappens,whatis,whatfunc,whatpackage"
    );
}
