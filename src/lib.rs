// src/lib.rs

//! Backend-neutral counters, gauges and histograms.
//!
//! Application code depends on the [`domain::MetricFactory`] trait and the
//! handle traits it returns. The concrete backend, Prometheus or no-op, is
//! chosen once at startup from [`MetricsConfig`].
use anyhow::Result;
use domain::MetricFactoryPtr;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod config;
mod infrastructure;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
    NoopMetricFactory,
    PrometheusMetricFactory,
};

/// Build the metric factory selected by `config`.
pub fn create_metric_factory(config: &MetricsConfig) -> Result<MetricFactoryPtr> {
    // ---
    tracing::info!(backend = %config.backend, prefix = %config.prefix, "Creating metric factory");

    match config.backend {
        MetricsBackend::Prometheus => create_prom_metrics(&config.prefix),
        MetricsBackend::Noop => create_noop_metrics(),
    }
}

/// Build the metric factory determined by environment variables.
///
/// # Errors
/// Returns an error if `METRICS_TYPE` or `METRICS_PREFIX` is invalid.
pub fn create_metric_factory_from_env() -> Result<MetricFactoryPtr> {
    // ---
    let config = MetricsConfig::from_env()?;
    create_metric_factory(&config)
}
