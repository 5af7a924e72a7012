mod handles;
mod instrument;
mod prometheus_factory;
mod snapshot;

pub use prometheus_factory::PrometheusMetricFactory;
use std::sync::Arc;

// Re-export utilities for internal use within this module
use snapshot::render;

/// Creates a new Prometheus metric factory.
///
/// The factory owns a fresh registry; every metric it creates is named
/// `prefix + name`. Use [`PrometheusMetricFactory::with_default_registry`]
/// directly to share the process-wide registry instead.
///
/// Returns a fully initialized factory ready for use.
pub fn create(prefix: &str) -> anyhow::Result<crate::domain::MetricFactoryPtr> {
    tracing::info!("Initializing Prometheus metrics");

    Ok(Arc::new(PrometheusMetricFactory::new(prefix)))
}
