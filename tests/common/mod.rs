// Test helpers are intentionally partially used
#![allow(dead_code)]

use metric_factory::PrometheusMetricFactory;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Prefix shared by every integration-test metric.
pub const TEST_PREFIX: &str = "itest_";

// ============================================================================
// Test Setup
// ============================================================================

/// A factory with its own registry, so tests never collide on names.
pub fn isolated_factory() -> PrometheusMetricFactory {
    // ---
    PrometheusMetricFactory::new(TEST_PREFIX)
}

/// `count` random alphanumeric label values.
pub fn random_label_values(count: usize) -> Vec<String> {
    // ---
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..12);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Borrow owned label values as the `&[&str]` the handles expect.
pub fn as_refs(values: &[String]) -> Vec<&str> {
    // ---
    values.iter().map(String::as_str).collect()
}
