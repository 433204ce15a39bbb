use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for report output.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
