//! Scalar-or-labeled storage shared by every Prometheus-backed handle.

use crate::domain::MetricsError;
use prometheus::core::{Metric, MetricVec, MetricVecBuilder};
use prometheus::proto;
use std::collections::HashMap;

/// A labeled Prometheus vector that can resolve a label set to one series.
pub(super) trait SeriesVec: Send + Sync {
    type Series: Metric;

    fn series(&self, labels: &HashMap<&str, &str>) -> prometheus::Result<Self::Series>;
}

impl<B: MetricVecBuilder> SeriesVec for MetricVec<B> {
    type Series = B::M;

    fn series(&self, labels: &HashMap<&str, &str>) -> prometheus::Result<B::M> {
        // Creates the series on first use of a label combination.
        self.get_metric_with(labels)
    }
}

/// Exactly one of: a single series, or a vector keyed by fixed label names.
pub(super) enum Instrument<V: SeriesVec> {
    Scalar(V::Series),
    Labeled { label_names: Vec<String>, vec: V },
}

impl<V: SeriesVec> Instrument<V> {
    // ---
    pub(super) fn labeled(label_names: &[&str], vec: V) -> Self {
        Instrument::Labeled {
            label_names: label_names.iter().map(|name| name.to_string()).collect(),
            vec,
        }
    }

    /// Run `f` against the series selected by `label_vals`.
    ///
    /// # Panics
    /// If the number of values does not match the number of label names.
    pub(super) fn with_series(&self, label_vals: &[&str], f: impl FnOnce(&V::Series)) {
        match self {
            Instrument::Scalar(series) => {
                labels_for::<&str>(&[], label_vals);
                f(series);
            }
            Instrument::Labeled { label_names, vec } => {
                let labels = labels_for(label_names.as_slice(), label_vals);
                let series = vec
                    .series(&labels)
                    .unwrap_or_else(|err| panic!("failed to resolve series {labels:?}: {err}"));
                f(&series);
            }
        }
    }

    /// Point-in-time snapshot of the series selected by `label_vals`.
    ///
    /// # Panics
    /// If the number of values does not match the number of label names.
    pub(super) fn snapshot(&self, label_vals: &[&str]) -> Result<proto::Metric, MetricsError> {
        match self {
            Instrument::Scalar(series) => {
                labels_for::<&str>(&[], label_vals);
                Ok(series.metric())
            }
            Instrument::Labeled { label_names, vec } => {
                let labels = labels_for(label_names.as_slice(), label_vals);
                let series = vec
                    .series(&labels)
                    .map_err(|err| MetricsError::Read(err.to_string()))?;
                Ok(series.metric())
            }
        }
    }
}

/// Pair label names with values positionally.
///
/// # Panics
/// If the two slices differ in length.
pub(super) fn labels_for<'a, S: AsRef<str>>(
    names: &'a [S],
    values: &[&'a str],
) -> HashMap<&'a str, &'a str> {
    // ---
    if names.len() != values.len() {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        panic!(
            "got {} ({:?}) values for {} labels ({:?})",
            values.len(),
            values,
            names.len(),
            names
        );
    }

    names
        .iter()
        .map(|name| name.as_ref())
        .zip(values.iter().copied())
        .collect()
}
