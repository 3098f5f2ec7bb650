//! Render tree - the output of an inspection.

use serde::{Deserialize, Serialize};

/// What a rendered node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Resource,
    Container,
    Record,
    /// A composite reached again while it was already being rendered.
    /// Produced by the renderer, never by classification.
    Recursion,
}

impl NodeKind {
    /// Display name of the type, as shown next to the node label.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Null => "NULL",
            NodeKind::Boolean => "Boolean",
            NodeKind::Integer => "Integer",
            NodeKind::Float => "Float",
            NodeKind::Text => "String",
            NodeKind::Resource => "Resource",
            NodeKind::Container => "Array",
            NodeKind::Record => "Object",
            NodeKind::Recursion => "Recursion",
        }
    }
}

/// One node of the rendered tree.
///
/// Text fields other than `label` are already escaped for embedding in
/// markup. The tree owns no reference back to the inspected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub label: String,
    pub kind: NodeKind,
    pub summary: String,
    /// Type-level annotation, e.g. `"60 characters"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Callback annotation, e.g. `"Mailer::send()"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(default)]
    pub children: Vec<RenderNode>,
    /// Whether the node can be toggled open. Always equal to
    /// `!children.is_empty()`; presentation starts it collapsed.
    #[serde(default)]
    pub expandable: bool,
}

impl RenderNode {
    /// A childless node.
    pub fn leaf(label: impl Into<String>, kind: NodeKind, summary: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            summary: summary.into(),
            detail: None,
            callback: None,
            children: Vec::new(),
            expandable: false,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_callback(mut self, callback: Option<String>) -> Self {
        self.callback = callback;
        self
    }

    pub fn with_children(mut self, children: Vec<RenderNode>) -> Self {
        self.expandable = !children.is_empty();
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RenderNode::node_count).sum::<usize>()
    }

    /// Find a direct child by label.
    pub fn child(&self, label: &str) -> Option<&RenderNode> {
        self.children.iter().find(|c| c.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_children_sets_expandable() {
        let empty = RenderNode::leaf("a", NodeKind::Container, "0 elements").with_children(vec![]);
        assert!(!empty.expandable);

        let full = RenderNode::leaf("a", NodeKind::Container, "1 element")
            .with_children(vec![RenderNode::leaf("0", NodeKind::Integer, "1")]);
        assert!(full.expandable);
        assert_eq!(full.node_count(), 2);
        assert_eq!(full.child("0").unwrap().summary, "1");
    }

    #[test]
    fn test_serializes_without_empty_annotations() {
        let node = RenderNode::leaf("n", NodeKind::Integer, "42");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "Integer");
        assert!(json.get("detail").is_none());
        assert!(json.get("callback").is_none());

        let back: RenderNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(NodeKind::Container.type_name(), "Array");
        assert_eq!(NodeKind::Record.type_name(), "Object");
        assert_eq!(NodeKind::Text.type_name(), "String");
    }
}
