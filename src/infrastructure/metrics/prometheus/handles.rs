//! Domain handles wrapping Prometheus instruments.

use super::instrument::Instrument;
use super::snapshot::{counter_value, gauge_value, histogram_info};
use crate::domain::{Counter, Gauge, Histogram, MetricsError};
use prometheus::{CounterVec, GaugeVec, HistogramVec};

/// Counter backed by a Prometheus `Counter` or `CounterVec`.
pub struct PrometheusCounter {
    instrument: Instrument<CounterVec>,
}

impl PrometheusCounter {
    pub(super) fn new(instrument: Instrument<CounterVec>) -> Self {
        Self { instrument }
    }
}

impl Counter for PrometheusCounter {
    // ---
    fn inc(&self, label_vals: &[&str]) {
        self.instrument.with_series(label_vals, |counter| counter.inc());
    }

    fn add(&self, val: f64, label_vals: &[&str]) {
        assert!(val >= 0.0, "counter cannot decrease in value (got {val})");
        self.instrument
            .with_series(label_vals, |counter| counter.inc_by(val));
    }

    fn try_value(&self, label_vals: &[&str]) -> Result<f64, MetricsError> {
        counter_value(&self.instrument.snapshot(label_vals)?)
    }
}

/// Gauge backed by a Prometheus `Gauge` or `GaugeVec`.
pub struct PrometheusGauge {
    instrument: Instrument<GaugeVec>,
}

impl PrometheusGauge {
    pub(super) fn new(instrument: Instrument<GaugeVec>) -> Self {
        Self { instrument }
    }
}

impl Gauge for PrometheusGauge {
    // ---
    fn inc(&self, label_vals: &[&str]) {
        self.instrument.with_series(label_vals, |gauge| gauge.inc());
    }

    fn dec(&self, label_vals: &[&str]) {
        self.instrument.with_series(label_vals, |gauge| gauge.dec());
    }

    fn add(&self, val: f64, label_vals: &[&str]) {
        self.instrument.with_series(label_vals, |gauge| gauge.add(val));
    }

    fn set(&self, val: f64, label_vals: &[&str]) {
        self.instrument.with_series(label_vals, |gauge| gauge.set(val));
    }

    fn try_value(&self, label_vals: &[&str]) -> Result<f64, MetricsError> {
        gauge_value(&self.instrument.snapshot(label_vals)?)
    }
}

/// Histogram backed by a Prometheus `Histogram` or `HistogramVec`.
///
/// Buckets are the Prometheus defaults.
pub struct PrometheusHistogram {
    instrument: Instrument<HistogramVec>,
}

impl PrometheusHistogram {
    pub(super) fn new(instrument: Instrument<HistogramVec>) -> Self {
        Self { instrument }
    }
}

impl Histogram for PrometheusHistogram {
    // ---
    fn observe(&self, val: f64, label_vals: &[&str]) {
        self.instrument
            .with_series(label_vals, |histogram| histogram.observe(val));
    }

    fn try_info(&self, label_vals: &[&str]) -> Result<(u64, f64), MetricsError> {
        histogram_info(&self.instrument.snapshot(label_vals)?)
    }
}
