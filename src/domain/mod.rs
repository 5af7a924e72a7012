mod error;
mod metrics;

// Publicly expose the metrics abstraction
pub use error::MetricsError;
pub use metrics::{
    Counter, CounterPtr, Gauge, GaugePtr, Histogram, HistogramPtr, MetricFactory, MetricFactoryPtr,
};
