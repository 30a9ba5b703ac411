use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(quiet: bool) -> &'static str {
    if quiet { "error" } else { "info" }
}

/// Install the global JSON subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise quiet mode only shows errors. Calling
/// this more than once is harmless, later calls are ignored.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    let result = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!(event = "core.logging.initialized", quiet = quiet);
    }
}
