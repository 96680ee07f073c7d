//! Tracing initialization

use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize the tracing subscriber for CLI output.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at debug (verbose)
/// or info level. Initialization is idempotent in the sense that a second
/// call fails quietly, which keeps tests that share a process happy.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("dragnet=debug,info")
            } else {
                EnvFilter::try_new("dragnet=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
