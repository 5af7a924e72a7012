//! Backend-neutral metric instruments.
//!
//! Instrumented code depends only on these traits. A [`MetricFactory`]
//! creates named instruments, optionally keyed by an ordered list of label
//! names, and hands back shared handles that are safe to use from any
//! thread.
//!
//! Label values are passed positionally on every call. The number of
//! values must match the number of label names given at creation time;
//! a mismatch is a programming error and panics. Scalar instruments take
//! an empty slice.

use super::MetricsError;
use std::sync::Arc;

/// Creates counters, gauges and histograms against a concrete backend.
pub trait MetricFactory: Send + Sync + 'static {
    // ---
    /// Create and register a counter. An empty `label_names` yields a scalar counter.
    ///
    /// # Panics
    /// If the backend rejects the name or the name is already registered.
    fn new_counter(&self, name: &str, help: &str, label_names: &[&str]) -> CounterPtr;

    /// Create and register a gauge. An empty `label_names` yields a scalar gauge.
    ///
    /// # Panics
    /// If the backend rejects the name or the name is already registered.
    fn new_gauge(&self, name: &str, help: &str, label_names: &[&str]) -> GaugePtr;

    /// Create and register a histogram with the backend's default buckets.
    ///
    /// # Panics
    /// If the backend rejects the name or the name is already registered.
    fn new_histogram(&self, name: &str, help: &str, label_names: &[&str]) -> HistogramPtr;

    /// Render everything this factory has registered in Prometheus text format.
    fn render(&self) -> String;
}

/// A monotonically increasing value.
pub trait Counter: Send + Sync {
    // ---
    /// Add 1 to the series selected by `label_vals`.
    fn inc(&self, label_vals: &[&str]);

    /// Add `val` to the series selected by `label_vals`.
    ///
    /// # Panics
    /// If `val` is negative; counters cannot decrease.
    fn add(&self, val: f64, label_vals: &[&str]);

    /// Read the current value of the series selected by `label_vals`.
    fn try_value(&self, label_vals: &[&str]) -> Result<f64, MetricsError>;

    /// Like [`Counter::try_value`], but a failed read is logged and reported as `0.0`.
    fn value(&self, label_vals: &[&str]) -> f64 {
        or_zero(self.try_value(label_vals), "counter")
    }
}

/// A value that can go up and down.
pub trait Gauge: Send + Sync {
    // ---
    fn inc(&self, label_vals: &[&str]);

    fn dec(&self, label_vals: &[&str]);

    fn add(&self, val: f64, label_vals: &[&str]);

    /// Overwrite the value of the selected series.
    fn set(&self, val: f64, label_vals: &[&str]);

    fn try_value(&self, label_vals: &[&str]) -> Result<f64, MetricsError>;

    /// Like [`Gauge::try_value`], but a failed read is logged and reported as `0.0`.
    fn value(&self, label_vals: &[&str]) -> f64 {
        or_zero(self.try_value(label_vals), "gauge")
    }
}

/// A distribution of observed values.
pub trait Histogram: Send + Sync {
    // ---
    /// Record a single observation.
    fn observe(&self, val: f64, label_vals: &[&str]);

    /// Observation count and running sum of the selected series.
    fn try_info(&self, label_vals: &[&str]) -> Result<(u64, f64), MetricsError>;

    /// Like [`Histogram::try_info`], but a failed read is logged and reported as `(0, 0.0)`.
    fn info(&self, label_vals: &[&str]) -> (u64, f64) {
        or_zero(self.try_info(label_vals), "histogram")
    }
}

/// Type alias for any backend that implements MetricFactory.
pub type MetricFactoryPtr = Arc<dyn MetricFactory>;

pub type CounterPtr = Arc<dyn Counter>;
pub type GaugePtr = Arc<dyn Gauge>;
pub type HistogramPtr = Arc<dyn Histogram>;

fn or_zero<T: Default>(result: Result<T, MetricsError>, kind: &str) -> T {
    // ---
    result.unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to read {kind} metric");
        T::default()
    })
}
