//! Recoverable failures when reading a metric back.

use thiserror::Error;

/// Why a series could not be read.
///
/// Usage errors (wrong label count, duplicate names) are not represented
/// here; they panic at the call site.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The backend could not resolve or snapshot the series.
    #[error("failed to read metric: {0}")]
    Read(String),

    /// The snapshot did not carry the expected value.
    #[error("{0} field missing")]
    FieldMissing(&'static str),
}
