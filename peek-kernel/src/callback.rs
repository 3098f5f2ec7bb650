//! Callback detection.
//!
//! Whether a text names something invocable is host knowledge, so the
//! renderer asks a [`CallableResolver`]. A detected callback only adds an
//! annotation to the node; it never changes kind or children.

use std::collections::HashSet;

use peek_api::{Container, Value};

use crate::registry::RecursionMarker;
use crate::text::escape;

/// Host-provided knowledge of invocable names.
///
/// Names are either plain function names (`"strlen"`) or `Class::method`.
pub trait CallableResolver {
    fn is_callable(&self, name: &str) -> bool;
}

/// Set-backed resolver. The default instance knows no callables.
#[derive(Debug, Clone, Default)]
pub struct KnownCallables {
    names: HashSet<String>,
}

impl KnownCallables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownCallables {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl CallableResolver for KnownCallables {
    fn is_callable(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<F: Fn(&str) -> bool> CallableResolver for F {
    fn is_callable(&self, name: &str) -> bool {
        self(name)
    }
}

/// Annotation for a text that names a callable: `"name()"`.
///
/// The resolver sees the full text. The annotation repeats `shown`, the
/// escaped summary the node displays, so a truncated name stays truncated.
pub fn text_callback(text: &str, shown: &str, resolver: &dyn CallableResolver) -> Option<String> {
    if text.is_empty() || !resolver.is_callable(text) {
        return None;
    }
    Some(format!("{}()", shown))
}

/// Annotation for a `[target, method]` pair: `"Class::method()"`.
///
/// `target` is a class name or a record (whose class is used).
pub fn container_callback(container: &Container, resolver: &dyn CallableResolver) -> Option<String> {
    let marker = RecursionMarker::get();
    let mut members = container
        .iter()
        .filter(|(key, _)| !marker.matches(key))
        .map(|(_, value)| value);

    let (target, method) = match (members.next(), members.next(), members.next()) {
        (Some(target), Some(method), None) => (target, method),
        _ => return None,
    };

    let class = match target {
        Value::Text(name) => name.clone(),
        Value::Record(cell) => cell.try_borrow().ok()?.class_name().to_string(),
        _ => return None,
    };
    let Value::Text(method) = method else {
        return None;
    };

    let name = format!("{class}::{method}");
    if !resolver.is_callable(&name) {
        return None;
    }
    Some(format!("{}::{}()", escape(&class), escape(method)))
}
