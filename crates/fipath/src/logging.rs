use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Stdout is reserved for the rendered report, so diagnostics go to stderr.
/// The level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable.
pub fn init(level: &str) {
    let default_filter = format!("fipath={level},fipath_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}
