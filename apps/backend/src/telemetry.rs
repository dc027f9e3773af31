use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default directives when RUST_LOG is unset: application logs at info,
/// the driver and ORM quieted to warnings so request lines stay readable.
const DEFAULT_DIRECTIVES: &str = "info,actix_web=warn,sqlx=warn,sea_orm=warn";

/// Install the global JSON subscriber. One event per line, fields
/// flattened to the top level for log shippers.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let json_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_current_span(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .init();
}
