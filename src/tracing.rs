//! Tracing initialization.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Level used when `RUST_LOG` does not say otherwise.
fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Initialize tracing for the binary, writing to stderr. Safe to call multiple times.
///
/// `verbose` raises the default level from WARN to DEBUG; `RUST_LOG` directives
/// still apply on top.
pub fn init(verbose: bool) {
    install(default_level(verbose), false);
}

/// Initialize tracing for tests at DEBUG, captured by the test harness.
pub fn init_test() {
    install(Level::DEBUG, true);
}

fn install(level: Level, test_writer: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        let result = if test_writer {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
