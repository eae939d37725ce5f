//! Telemetry helpers for applications embedding `forecast-chart`.
//!
//! Session transitions and frame builds emit `tracing` events. Hosts either
//! call `init_default_tracing` or install their own subscriber.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only does anything with the `telemetry` feature. `false` means nothing was
/// installed, either because the feature is off or the host already owns the
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
