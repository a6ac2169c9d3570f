//! Telemetry helpers for applications embedding `chart-config`.
//!
//! The pipeline only emits `tracing` events; installing a subscriber is left
//! to the host unless it opts into `init_default_tracing`.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "chart_config=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`
/// (falling back to `chart_config=info`).
///
/// Returns `false` when a global subscriber is already installed.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .is_ok()
}

/// No-op without the `telemetry` feature.
#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}
