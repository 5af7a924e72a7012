// src/config.rs

//! Metrics configuration loaded from environment variables.
//!
//! This module defines the startup-time choice of metrics backend and the
//! name prefix applied to every metric. Configuration is validated eagerly
//! and failures are treated as deployment errors rather than recoverable
//! runtime conditions.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable, falling back to a default.
///
/// Unlike a parse-with-fallback, the raw string is returned so callers can
/// validate it and reject bad values instead of silently ignoring them.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails with an error
/// mentioning the offending variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Invalid configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

/// Characters Prometheus accepts in a metric name.
static METRIC_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").expect("valid metric prefix regex"));

// ============================================================
// Backend selection
// ============================================================

/// Which metrics implementation backs the application's factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsBackend {
    /// Discard everything.
    #[default]
    Noop,
    /// Register with a Prometheus registry.
    Prometheus,
}

impl FromStr for MetricsBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "noop" => Ok(MetricsBackend::Noop),
            "prom" => Ok(MetricsBackend::Prometheus),
            other => bail!(
                "Invalid configuration: METRICS_TYPE={other:?} (expected \"prom\" or \"noop\")"
            ),
        }
    }
}

impl fmt::Display for MetricsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsBackend::Noop => f.write_str("noop"),
            MetricsBackend::Prometheus => f.write_str("prom"),
        }
    }
}

// ============================================================
// Public configuration facade
// ============================================================

/// Metrics configuration.
///
/// This is the single source of truth for how the metric factory is built.
#[derive(Debug, Clone, Default)]
pub struct MetricsConfig {
    /// Backend to create. Defaults to [`MetricsBackend::Noop`].
    pub backend: MetricsBackend,

    /// Prefix prepended to every metric name. Defaults to empty.
    pub prefix: String,
}

impl MetricsConfig {
    /// Loads and validates metrics configuration from the environment.
    ///
    /// - `METRICS_TYPE`: `prom` or `noop` (default)
    /// - `METRICS_PREFIX`: metric name prefix (default empty)
    ///
    /// # Errors
    /// Returns an error if either variable holds an unusable value.
    pub fn from_env() -> Result<Self> {
        // ---
        let backend =
            optional_env!("METRICS_TYPE", MetricsBackend::default()).parse::<MetricsBackend>()?;
        let prefix = optional_env!("METRICS_PREFIX", "");

        if !prefix.is_empty() && !METRIC_PREFIX_RE.is_match(&prefix) {
            bail!(
                "Invalid configuration: METRICS_PREFIX={prefix:?} is not a valid metric name prefix"
            );
        }

        Ok(Self { backend, prefix })
    }
}

// ============================================================
// Tests
// ============================================================
