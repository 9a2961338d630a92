#![deny(unsafe_code)]

//! Example program for the `what` debug logger.
//!
//! `cargo run` prints only the info lines. `cargo run --features what` adds
//! the debug lines on stderr, and
//! `WHAT=what_demo::transport cargo run --features what` keeps only the
//! debug lines of the transport module.

use std::io::{self, IsTerminal};
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod transport {
    use std::time::Duration;

    #[derive(Debug)]
    pub struct Client {
        pub proxy: Option<String>,
        pub jar: Option<Vec<String>>,
        pub timeout: Duration,
    }

    impl Client {
        pub fn new(timeout: Duration) -> Self {
            what::happens!("Create HTTP client");
            Self {
                proxy: None,
                jar: None,
                timeout,
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,what=debug")),
        )
        .with_ansi(io::stdout().is_terminal())
        .init();

    // Pin the module filter before anything else can touch the environment.
    what::init();
    #[cfg(feature = "tracing-output")]
    what::use_tracing();

    // Some log output for the user.
    info!(variant = %what::BuildVariant::current(), "Start");

    what::func!();
    what::package!();

    let client = transport::Client::new(Duration::from_secs(10));
    what::is!(client);
    what::happens!("Client has a {} seconds timeout", client.timeout.as_secs_f64());
    what::happens_if!(client.jar.is_none(), "client has no cookie jar");

    info!(proxy = client.proxy.as_deref().unwrap_or("none"), "Done.");
}
