use metric_factory::domain::MetricFactory;
use std::sync::Arc;
use std::thread;

mod common;

use common::{as_refs, isolated_factory, random_label_values};

// ============================================================================
// Counters
// ============================================================================

#[test]
fn fresh_counter_inc_reads_one() {
    // ---
    let factory = isolated_factory();
    let counter = factory.new_counter("events_total", "Events seen.", &[]);

    assert_eq!(counter.value(&[]), 0.0);
    counter.inc(&[]);
    assert_eq!(counter.value(&[]), 1.0);
}

#[test]
fn counter_add_accumulates() {
    // ---
    let factory = isolated_factory();
    let counter = factory.new_counter("bytes_total", "Bytes sent.", &[]);

    counter.add(1.5, &[]);
    counter.add(2.0, &[]);
    counter.inc(&[]);

    assert_eq!(counter.try_value(&[]).unwrap(), 4.5);
}

#[test]
fn labeled_series_accumulate_independently() {
    // ---
    let factory = isolated_factory();
    let counter = factory.new_counter("requests_total", "Requests.", &["method"]);

    counter.inc(&["GET"]);
    counter.inc(&["GET"]);
    counter.add(5.0, &["POST"]);

    assert_eq!(counter.value(&["GET"]), 2.0);
    assert_eq!(counter.value(&["POST"]), 5.0);
    // Reading an unseen combination creates it at zero.
    assert_eq!(counter.value(&["DELETE"]), 0.0);
}

#[test]
fn same_label_values_resolve_to_one_stable_series() {
    // ---
    let factory = isolated_factory();
    let names = ["a", "b", "c"];
    let counter = factory.new_counter("stable_total", "Stability.", &names);

    for round in 0..10 {
        let mut values = random_label_values(names.len());
        // Keep rounds distinct even if the random draws repeat.
        values[0].push_str(&format!("-{round}"));
        let values = as_refs(&values);

        for _ in 0..3 {
            counter.inc(&values);
        }
        assert_eq!(counter.value(&values), 3.0);
    }
}

#[test]
#[should_panic(expected = "counter cannot decrease in value")]
fn counter_rejects_negative_add() {
    // ---
    let factory = isolated_factory();
    factory.new_counter("down_total", "Never down.", &[]).add(-1.0, &[]);
}

// ============================================================================
// Gauges
// ============================================================================

#[test]
fn gauge_set_is_last_write_wins() {
    // ---
    let factory = isolated_factory();
    let gauge = factory.new_gauge("temperature", "Temperature.", &[]);

    gauge.set(5.0, &[]);
    gauge.add(2.0, &[]);
    assert_eq!(gauge.value(&[]), 7.0);

    gauge.set(1.0, &[]);
    assert_eq!(gauge.value(&[]), 1.0);
}

#[test]
fn gauge_inc_dec_and_negative_add() {
    // ---
    let factory = isolated_factory();
    let gauge = factory.new_gauge("queue_depth", "Queue depth.", &["queue"]);

    gauge.inc(&["high"]);
    gauge.inc(&["high"]);
    gauge.dec(&["high"]);
    gauge.add(-3.5, &["low"]);

    assert_eq!(gauge.value(&["high"]), 1.0);
    assert_eq!(gauge.value(&["low"]), -3.5);
}

// ============================================================================
// Histograms
// ============================================================================

#[test]
fn histogram_info_reports_count_and_sum() {
    // ---
    let factory = isolated_factory();
    let histogram = factory.new_histogram("latency_seconds", "Latency.", &[]);

    histogram.observe(3.0, &[]);
    histogram.observe(5.0, &[]);

    assert_eq!(histogram.info(&[]), (2, 8.0));
}

#[test]
fn labeled_histogram_series_are_separate() {
    // ---
    let factory = isolated_factory();
    let histogram = factory.new_histogram("payload_bytes", "Payload size.", &["dir", "codec"]);

    histogram.observe(100.0, &["in", "json"]);
    histogram.observe(50.0, &["out", "json"]);
    histogram.observe(25.0, &["in", "json"]);

    assert_eq!(histogram.try_info(&["in", "json"]).unwrap(), (2, 125.0));
    assert_eq!(histogram.info(&["out", "json"]), (1, 50.0));
    assert_eq!(histogram.info(&["out", "proto"]), (0, 0.0));
}

// ============================================================================
// Label count mismatches
// ============================================================================

#[test]
#[should_panic(expected = "values for 2 labels")]
fn counter_inc_with_too_few_values_panics() {
    let factory = isolated_factory();
    factory.new_counter("c_total", "C.", &["a", "b"]).inc(&["x"]);
}

#[test]
#[should_panic(expected = "got 2 ([\"x\", \"y\"]) values for 1 labels")]
fn counter_value_with_too_many_values_panics() {
    let factory = isolated_factory();
    factory.new_counter("c_total", "C.", &["a"]).value(&["x", "y"]);
}

#[test]
#[should_panic(expected = "values for 0 labels")]
fn scalar_gauge_with_values_panics() {
    let factory = isolated_factory();
    factory.new_gauge("g", "G.", &[]).set(1.0, &["stray"]);
}

#[test]
#[should_panic(expected = "values for 1 labels")]
fn labeled_gauge_without_values_panics() {
    let factory = isolated_factory();
    factory.new_gauge("g", "G.", &["a"]).dec(&[]);
}

#[test]
#[should_panic(expected = "values for 2 labels")]
fn histogram_info_with_wrong_count_panics() {
    let factory = isolated_factory();
    factory.new_histogram("h", "H.", &["a", "b"]).info(&["x"]);
}

#[test]
#[should_panic(expected = "values for 1 labels")]
fn histogram_observe_with_wrong_count_panics() {
    let factory = isolated_factory();
    factory.new_histogram("h", "H.", &["a"]).observe(1.0, &["x", "y", "z"]);
}

// ============================================================================
// Registration
// ============================================================================

#[test]
#[should_panic(expected = "failed to register metric itest_dup_total")]
fn duplicate_name_on_one_factory_panics() {
    // ---
    let factory = isolated_factory();
    factory.new_counter("dup_total", "First.", &[]);
    factory.new_counter("dup_total", "First.", &[]);
}

#[test]
fn render_lists_every_registered_metric() {
    // ---
    let factory = isolated_factory();
    factory.new_counter("a_total", "A.", &[]).inc(&[]);
    factory.new_gauge("b", "B.", &["k"]).set(2.0, &["v"]);
    factory.new_histogram("c_seconds", "C.", &[]).observe(0.1, &[]);

    let text = factory.render();
    assert!(text.contains("# TYPE itest_a_total counter"));
    assert!(text.contains("itest_b{k=\"v\"} 2"));
    assert!(text.contains("# TYPE itest_c_seconds histogram"));
    assert!(text.contains("itest_c_seconds_count 1"));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_updates_are_not_lost() {
    // ---
    const THREADS: usize = 8;
    const ITERATIONS: usize = 1_000;

    let factory = isolated_factory();
    let counter = factory.new_counter("hits_total", "Hits.", &["worker"]);
    let gauge = factory.new_gauge("active", "Active.", &[]);
    let histogram = factory.new_histogram("work_seconds", "Work.", &[]);

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let counter = Arc::clone(&counter);
            let gauge = Arc::clone(&gauge);
            let histogram = Arc::clone(&histogram);
            scope.spawn(move || {
                let label = if worker % 2 == 0 { "even" } else { "odd" };
                for _ in 0..ITERATIONS {
                    counter.inc(&[label]);
                    gauge.inc(&[]);
                    histogram.observe(1.0, &[]);
                    gauge.dec(&[]);
                }
            });
        }
    });

    let per_label = (THREADS / 2 * ITERATIONS) as f64;
    assert_eq!(counter.value(&["even"]), per_label);
    assert_eq!(counter.value(&["odd"]), per_label);
    assert_eq!(gauge.value(&[]), 0.0);
    assert_eq!(
        histogram.info(&[]),
        ((THREADS * ITERATIONS) as u64, (THREADS * ITERATIONS) as f64)
    );
}
