use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = if cfg!(debug_assertions) {
    "kdtree_points=debug,info"
} else {
    "warn"
};

/// Initialize logging to stderr, leaving stdout for query results.
///
/// With the `profiling` feature, spans emitted by `profiling::scope!` are logged
/// with their timings when they close.
pub fn setup_logging_and_profiling() {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);
    #[cfg(feature = "profiling")]
    let fmt_layer = fmt_layer.with_span_events(fmt::format::FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    #[cfg(feature = "profiling")]
    tracing::info!("Logging initialized (profiling spans enabled)");
    #[cfg(not(feature = "profiling"))]
    tracing::debug!("Logging initialized (profiling disabled in this build)");
}
