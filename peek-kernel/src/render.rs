//! Renderer - recursive descent from a value to a render tree.
//!
//! Every top-level call ([`Renderer::render`], and each value passed to
//! [`Renderer::render_many`]) owns one [`VisitRegistry`]. Composites are
//! registered on first entry and stay registered until that call returns, so
//! a composite met again, through a cycle or a second path, renders as a
//! terminal `Recursion` node.

use std::cell::RefCell;

use peek_api::{Container, NodeKind, Record, RenderNode, Value};

use crate::callback::{container_callback, text_callback, CallableResolver, KnownCallables};
use crate::classify::classify;
use crate::config::RenderConfig;
use crate::registry::{RecursionMarker, VisitRegistry};
use crate::text::{count_label, escape, truncate};

/// Label used when the caller has no meaningful name for a value.
pub const DEFAULT_LABEL: &str = "...";

/// Turns values into render trees.
///
/// The renderer always renders. `RenderConfig::enabled` is honored by the
/// output helpers that write trees, which skip rendering when it is off.
pub struct Renderer {
    config: RenderConfig,
    truncate_length: usize,
    callables: Box<dyn CallableResolver>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let truncate_length = config.effective_truncate_length();
        Self {
            config,
            truncate_length,
            callables: Box::new(KnownCallables::default()),
        }
    }

    /// Use `resolver` to decide which texts and pairs are callbacks.
    pub fn with_callables(mut self, resolver: impl CallableResolver + 'static) -> Self {
        self.callables = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one value as a top-level invocation.
    pub fn render(&self, value: &Value, label: &str) -> RenderNode {
        let mut registry = VisitRegistry::new();
        let node = self.render_value(value, label, &mut registry);
        tracing::debug!(
            label,
            nodes = node.node_count(),
            composites = registry.len(),
            recursions = registry.recursion_hits(),
            "rendered value"
        );
        node
        // `registry` drops here and sweeps every registration
    }

    /// Render several values, each as its own top-level invocation.
    pub fn render_many(&self, values: &[Value]) -> Vec<RenderNode> {
        values.iter().map(|v| self.render(v, DEFAULT_LABEL)).collect()
    }

    fn render_value(&self, value: &Value, label: &str, registry: &mut VisitRegistry) -> RenderNode {
        let kind = classify(value);
        match value {
            Value::Null => RenderNode::leaf(label, kind, ""),
            Value::Bool(b) => RenderNode::leaf(label, kind, if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => RenderNode::leaf(label, kind, n.to_string()),
            Value::Float(f) => RenderNode::leaf(label, kind, f.to_string()),
            Value::Resource(r) => RenderNode::leaf(label, kind, escape(&r.category)),
            Value::Text(s) => self.render_text(s, label),
            Value::Container(cell) => {
                let id = value.identity().unwrap_or_default();
                self.render_container(cell, id, label, registry)
            }
            Value::Record(cell) => {
                let id = value.identity().unwrap_or_default();
                self.render_record(cell, id, label, registry)
            }
        }
    }

    fn render_text(&self, text: &str, label: &str) -> RenderNode {
        let length = text.chars().count();
        let node = match truncate(text, self.truncate_length) {
            Some(short) => RenderNode::leaf(label, NodeKind::Text, escape(&short))
                .with_children(vec![RenderNode::leaf("", NodeKind::Text, escape(text))]),
            None => RenderNode::leaf(label, NodeKind::Text, escape(text)),
        };
        let callback = text_callback(text, &node.summary, self.callables.as_ref());
        node.with_detail(count_label(length, "character"))
            .with_callback(callback)
    }

    fn render_container(
        &self,
        cell: &RefCell<Container>,
        id: usize,
        label: &str,
        registry: &mut VisitRegistry,
    ) -> RenderNode {
        if registry.revisits(id) {
            return recursion(label);
        }
        let Ok(container) = cell.try_borrow() else {
            return unreadable(label);
        };

        let marker = RecursionMarker::get();
        let count = container.iter().filter(|(k, _)| !marker.matches(k)).count();
        let node = RenderNode::leaf(label, NodeKind::Container, count_label(count, "element"))
            .with_callback(container_callback(&container, self.callables.as_ref()));
        if count == 0 {
            return node;
        }

        registry.enter(id);
        let children = container
            .iter()
            .filter(|(k, _)| !marker.matches(k))
            .map(|(k, v)| self.render_value(v, &k.to_string(), registry))
            .collect();
        node.with_children(children)
    }

    fn render_record(
        &self,
        cell: &RefCell<Record>,
        id: usize,
        label: &str,
        registry: &mut VisitRegistry,
    ) -> RenderNode {
        if registry.revisits(id) {
            return recursion(label);
        }
        let Ok(record) = cell.try_borrow() else {
            return unreadable(label);
        };

        let marker = RecursionMarker::get();
        let node = RenderNode::leaf(label, NodeKind::Record, escape(record.class_name()));
        if record.iter().all(|(name, _)| marker.matches_name(name)) {
            return node;
        }

        registry.enter(id);
        let children = record
            .iter()
            .filter(|(name, _)| !marker.matches_name(name))
            .map(|(name, v)| self.render_value(v, name, registry))
            .collect();
        node.with_children(children)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

fn recursion(label: &str) -> RenderNode {
    RenderNode::leaf(label, NodeKind::Recursion, "Recursion")
}

// A member that is mutably borrowed elsewhere cannot be read right now.
fn unreadable(label: &str) -> RenderNode {
    tracing::trace!(label, "member is borrowed, rendering as null");
    RenderNode::leaf(label, NodeKind::Null, "")
}
