use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Events go to stderr so stdout carries only the JSON payload. `RUST_LOG`
/// takes precedence over `level` when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed (tests, embedding callers)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
