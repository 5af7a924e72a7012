use anyhow::Result;
use metric_factory::create_metric_factory_from_env;
use tracing::info;

/// Requests replayed by the demo: (method, latency in seconds).
const SAMPLE_REQUESTS: [(&str, f64); 4] = [
    ("GET", 0.012),
    ("GET", 0.030),
    ("POST", 0.250),
    ("GET", 0.008),
];

fn main() -> Result<()> {
    // Pick up METRICS_TYPE / METRICS_PREFIX from a local .env if present.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();
    info!("Starting metric-factory demo v{}...", env!("CARGO_PKG_VERSION"));

    let factory = create_metric_factory_from_env()?;

    let requests = factory.new_counter(
        "requests_total",
        "Requests handled, by method.",
        &["method"],
    );
    let in_flight = factory.new_gauge(
        "requests_in_flight",
        "Requests currently being served.",
        &[],
    );
    let latency = factory.new_histogram(
        "request_duration_seconds",
        "Request latency, by method.",
        &["method"],
    );

    for (method, secs) in SAMPLE_REQUESTS {
        in_flight.inc(&[]);
        requests.inc(&[method]);
        latency.observe(secs, &[method]);
        in_flight.dec(&[]);
    }

    let (count, sum) = latency.info(&["GET"]);
    info!(
        get = requests.value(&["GET"]),
        post = requests.value(&["POST"]),
        in_flight = in_flight.value(&[]),
        "Recorded sample requests"
    );
    info!(count, sum, "GET latency");

    print!("{}", factory.render());

    Ok(())
}
