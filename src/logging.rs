//! Logging setup. Diagnostics go to stderr so stdout carries only results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default directive for this crate's logs.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "pl_results=debug"
    } else {
        "pl_results=warn"
    }
}

/// Build the env filter: `RUST_LOG` plus this crate's default level.
pub fn env_filter(debug: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match default_directive(debug).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_logging(debug: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter(debug)),
        )
        .try_init();
}
