use serde_json::Value;

/// Destination for client error reports. Best-effort: `record` must not
/// block or fail, callers never await delivery.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, payload: &Value);
}

pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, payload: &Value) {
        tracing::error!("client error report: {}", payload);
    }
}
