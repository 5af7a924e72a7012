//! Prometheus metric factory.
//!
//! This module provides a concrete implementation of the `MetricFactory`
//! trait on top of the `prometheus` crate. Each factory owns the
//! `Registry` it registers into, so tests and embedders can create
//! isolated factories instead of sharing one process-wide namespace.
//!
//! Registration happens synchronously when an instrument is created. A
//! name the backend rejects, or a name already present in the registry,
//! is a configuration bug and panics.

use super::handles::{PrometheusCounter, PrometheusGauge, PrometheusHistogram};
use super::instrument::Instrument;
use crate::domain::{CounterPtr, GaugePtr, HistogramPtr, MetricFactory};
use prometheus::core::Collector;
use prometheus::{CounterVec, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry};
use std::sync::Arc;

/// Prometheus-based metric factory.
///
/// Every created metric is named `prefix + name`. Cloning the factory
/// shares the underlying registry.
#[derive(Clone)]
pub struct PrometheusMetricFactory {
    prefix: String,
    registry: Registry,
}

impl PrometheusMetricFactory {
    /// Creates a factory with its own, empty registry.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_registry(prefix, Registry::new())
    }

    /// Creates a factory that registers into `registry`.
    pub fn with_registry(prefix: impl Into<String>, registry: Registry) -> Self {
        let prefix = prefix.into();
        tracing::info!(prefix = %prefix, "Creating Prometheus metric factory");
        PrometheusMetricFactory { prefix, registry }
    }

    /// Creates a factory bound to the `prometheus` crate's process-wide registry.
    pub fn with_default_registry(prefix: impl Into<String>) -> Self {
        Self::with_registry(prefix, prometheus::default_registry().clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn full_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn register<C>(&self, full_name: &str, collector: &C)
    where
        C: Collector + Clone + 'static,
    {
        if let Err(err) = self.registry.register(Box::new(collector.clone())) {
            panic!("failed to register metric {full_name}: {err}");
        }
        tracing::debug!(metric = full_name, "Registered metric");
    }
}

/// Unwraps an instrument the backend built, or panics naming the metric.
fn built<T>(full_name: &str, result: prometheus::Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("invalid metric {full_name}: {err}"))
}

impl MetricFactory for PrometheusMetricFactory {
    // ---
    fn new_counter(&self, name: &str, help: &str, label_names: &[&str]) -> CounterPtr {
        let full_name = self.full_name(name);
        let opts = Opts::new(full_name.as_str(), help);

        let instrument = if label_names.is_empty() {
            let counter = built(&full_name, prometheus::Counter::with_opts(opts));
            self.register(&full_name, &counter);
            Instrument::Scalar(counter)
        } else {
            let vec = built(&full_name, CounterVec::new(opts, label_names));
            self.register(&full_name, &vec);
            Instrument::labeled(label_names, vec)
        };

        Arc::new(PrometheusCounter::new(instrument))
    }

    fn new_gauge(&self, name: &str, help: &str, label_names: &[&str]) -> GaugePtr {
        let full_name = self.full_name(name);
        let opts = Opts::new(full_name.as_str(), help);

        let instrument = if label_names.is_empty() {
            let gauge = built(&full_name, prometheus::Gauge::with_opts(opts));
            self.register(&full_name, &gauge);
            Instrument::Scalar(gauge)
        } else {
            let vec = built(&full_name, GaugeVec::new(opts, label_names));
            self.register(&full_name, &vec);
            Instrument::labeled(label_names, vec)
        };

        Arc::new(PrometheusGauge::new(instrument))
    }

    fn new_histogram(&self, name: &str, help: &str, label_names: &[&str]) -> HistogramPtr {
        let full_name = self.full_name(name);
        let opts = HistogramOpts::new(full_name.as_str(), help);

        let instrument = if label_names.is_empty() {
            let histogram = built(&full_name, prometheus::Histogram::with_opts(opts));
            self.register(&full_name, &histogram);
            Instrument::Scalar(histogram)
        } else {
            let vec = built(&full_name, HistogramVec::new(opts, label_names));
            self.register(&full_name, &vec);
            Instrument::labeled(label_names, vec)
        };

        Arc::new(PrometheusHistogram::new(instrument))
    }

    fn render(&self) -> String {
        super::render(&self.registry)
    }
}
