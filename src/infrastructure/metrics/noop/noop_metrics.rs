use crate::domain::{
    Counter, CounterPtr, Gauge, GaugePtr, Histogram, HistogramPtr, MetricFactory, MetricsError,
};
use std::sync::Arc;

/// No-op metric factory for testing or when metrics are disabled.
pub struct NoopMetricFactory;

impl NoopMetricFactory {
    pub fn new() -> Self {
        NoopMetricFactory
    }
}

impl Default for NoopMetricFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricFactory for NoopMetricFactory {
    // ---
    fn new_counter(&self, _: &str, _: &str, _: &[&str]) -> CounterPtr {
        Arc::new(NoopInstrument)
    }
    fn new_gauge(&self, _: &str, _: &str, _: &[&str]) -> GaugePtr {
        Arc::new(NoopInstrument)
    }
    fn new_histogram(&self, _: &str, _: &str, _: &[&str]) -> HistogramPtr {
        Arc::new(NoopInstrument)
    }
    fn render(&self) -> String {
        String::new()
    }
}

/// Accepts every update and always reads back zero.
struct NoopInstrument;

impl Counter for NoopInstrument {
    // ---
    fn inc(&self, _: &[&str]) {}
    fn add(&self, _: f64, _: &[&str]) {}
    fn try_value(&self, _: &[&str]) -> Result<f64, MetricsError> {
        Ok(0.0)
    }
}

impl Gauge for NoopInstrument {
    // ---
    fn inc(&self, _: &[&str]) {}
    fn dec(&self, _: &[&str]) {}
    fn add(&self, _: f64, _: &[&str]) {}
    fn set(&self, _: f64, _: &[&str]) {}
    fn try_value(&self, _: &[&str]) -> Result<f64, MetricsError> {
        Ok(0.0)
    }
}

impl Histogram for NoopInstrument {
    // ---
    fn observe(&self, _: f64, _: &[&str]) {}
    fn try_info(&self, _: &[&str]) -> Result<(u64, f64), MetricsError> {
        Ok((0, 0.0))
    }
}
