use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Emit an `[Ingest]` event, attaching `context` as a structured field when present.
pub fn log_event(level: LogLevel, message: &str, context: Option<Value>) {
    let context = context.map(|c| c.to_string()).unwrap_or_default();
    match level {
        LogLevel::Debug => tracing::debug!(context = %context, "[Ingest] {}", message),
        LogLevel::Info => tracing::info!(context = %context, "[Ingest] {}", message),
        LogLevel::Warn => tracing::warn!(context = %context, "[Ingest] {}", message),
        LogLevel::Error => tracing::error!(context = %context, "[Ingest] {}", message),
    }
}
