//! Telemetry helpers for the chart binary and embedding applications.
//!
//! Tracing setup stays explicit and opt-in. Library code only emits
//! `tracing` events; hosts either call `init_default_tracing` or wire their
//! own subscriber.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Events go to stderr so stdout keeps only the confirmation line.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
