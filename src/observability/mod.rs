//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/docnav/docnav-otlp.json` as OTLP JSON,
//! one export batch per line. The file rotates at 10 MiB and keeps three
//! numbered backups. The level comes from the `trace_level` option and
//! defaults to `info`.
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider and span exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, level_filter, trace_file_path, SERVICE_NAME, TRACE_FILE_NAME};
