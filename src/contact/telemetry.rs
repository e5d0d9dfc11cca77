//! Analytics capability

use serde_json::{Map, Value};

/// Event attributes (category, label, counts, flags)
pub type Attributes = Map<String, Value>;

/// Receives named analytics events
#[cfg_attr(test, mockall::automock)]
pub trait Telemetry: Send + Sync {
    fn track(&self, event: &str, attributes: Attributes);
}

/// Emits every event as a structured log record until a real analytics
/// backend is wired in
#[derive(Debug, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn track(&self, event: &str, attributes: Attributes) {
        let attributes = Value::Object(attributes);
        tracing::info!(target: "analytics", event, %attributes, "Analytics event");
    }
}

/// Build an attribute map from key/value pairs
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
