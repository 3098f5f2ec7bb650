//! Classifier - maps a value to the render strategy that applies to it.

use peek_api::{NodeKind, Value};

/// Classify a value. Pure; never recurses.
///
/// Composites always classify as `Container` or `Record`, even when they
/// also look invocable. That shape only adds a callback annotation.
pub fn classify(value: &Value) -> NodeKind {
    match value {
        Value::Null => NodeKind::Null,
        Value::Bool(_) => NodeKind::Boolean,
        Value::Int(_) => NodeKind::Integer,
        Value::Float(_) => NodeKind::Float,
        Value::Text(_) => NodeKind::Text,
        Value::Resource(_) => NodeKind::Resource,
        Value::Container(_) => NodeKind::Container,
        Value::Record(_) => NodeKind::Record,
    }
}
