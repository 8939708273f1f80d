//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on the trace resource.
pub const SERVICE_NAME: &str = "docnav";

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "docnav-otlp.json";

/// Path of the live trace file under `data_dir`.
#[must_use]
pub fn trace_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}

/// Builds the level filter from a directive such as `debug` or
/// `docnav=trace`. Unparseable directives fall back to `info`.
#[must_use]
pub fn level_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Routes `tracing` spans to the trace file in the plugin data directory.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed. Only the first call in a process takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if crate::infrastructure::ensure_dir(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(trace_file_path(&data_dir), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(level_filter(&config.trace_level))
        .with(otel_layer)
        .try_init();
}
