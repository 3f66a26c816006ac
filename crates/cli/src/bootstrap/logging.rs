use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for result lines. `RUST_LOG`
/// overrides `level` when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(false)
        .init();

    debug!("Logging initialized at level: {}", level);
}
