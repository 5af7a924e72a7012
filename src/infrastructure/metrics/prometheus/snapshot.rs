//! Reading values back out of Prometheus snapshots.

use crate::domain::MetricsError;
use prometheus::{proto, Encoder, Registry, TextEncoder};

/// Value of a counter snapshot.
pub(super) fn counter_value(snapshot: &proto::Metric) -> Result<f64, MetricsError> {
    snapshot
        .counter
        .as_ref()
        .map(|counter| counter.value())
        .ok_or(MetricsError::FieldMissing("counter"))
}

/// Value of a gauge snapshot.
pub(super) fn gauge_value(snapshot: &proto::Metric) -> Result<f64, MetricsError> {
    snapshot
        .gauge
        .as_ref()
        .map(|gauge| gauge.value())
        .ok_or(MetricsError::FieldMissing("gauge"))
}

/// Sample count and sample sum of a histogram snapshot.
pub(super) fn histogram_info(snapshot: &proto::Metric) -> Result<(u64, f64), MetricsError> {
    snapshot
        .histogram
        .as_ref()
        .map(|histogram| (histogram.sample_count(), histogram.sample_sum()))
        .ok_or(MetricsError::FieldMissing("histogram"))
}

/// Render the registry in Prometheus text format.
pub(super) fn render(registry: &Registry) -> String {
    // ---
    let mut buffer = Vec::new();
    if let Err(err) = TextEncoder::new().encode(&registry.gather(), &mut buffer) {
        tracing::error!(error = %err, "failed to encode metrics");
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_else(|err| {
        tracing::error!(error = %err, "encoded metrics are not valid UTF-8");
        String::new()
    })
}
