//! Opt-in `tracing` setup for hosts that have no subscriber of their own.
//!
//! Update passes log under the `plot_grid::api` targets: pass start and
//! aborts from `grid_update`, element creation and dropped ticks from
//! `reconciler`, tick-limit failures from `tick_generator`.

/// Filter used when `RUST_LOG` is unset: this crate's events at `info` and
/// above, everything else off.
pub const DEFAULT_TRACING_FILTER: &str = "plot_grid=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`]. Event targets are printed so reconciler and
/// orchestrator output stay apart.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_the_feature() {
        assert!(!super::init_default_tracing());
    }
}
