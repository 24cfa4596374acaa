//! Opt-in `tracing` setup for hosts embedding `plot-rs`.
//!
//! Plots log data passes at `debug`, frame building at `trace`, and plot
//! construction at `info`. Hosts with their own subscriber can ignore this
//! module entirely.

/// Filter used when `RUST_LOG` is unset: plot construction and warnings only.
pub const DEFAULT_FILTER: &str = "plot_rs=info";

/// Installs a compact subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with an explicit fallback filter directive,
/// e.g. `"plot_rs=trace"` to see every emitted frame and event.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing_with_filter};

    #[test]
    fn setup_is_a_no_op_without_the_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_filter("plot_rs=trace"));
    }
}
