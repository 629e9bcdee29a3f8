//! Opt-in tracing setup for hosts embedding `chart-sync`.
//!
//! Reconciliation emits structured `tracing` events (tier selection, series
//! rebuilds, guarded skips). Nothing is initialized implicitly: hosts
//! either install their own subscriber or call [`init_default_tracing`]
//! with the `telemetry` feature enabled.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, defaulting to
/// `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or another
/// global subscriber won the race; `true` on successful installation.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
