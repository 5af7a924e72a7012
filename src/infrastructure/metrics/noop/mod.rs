// src/infrastructure/metrics/noop/mod.rs
mod noop_metrics;

pub use noop_metrics::NoopMetricFactory;
use std::sync::Arc;

/// Creates a new no-op metric factory.
///
/// Instruments created by this factory do nothing - all updates are
/// ignored and every read returns zero. Useful for development, testing,
/// or when metrics are disabled.
///
/// Returns a fully initialized factory ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricFactoryPtr> {
    Ok(Arc::new(NoopMetricFactory::new()))
}
