//! HTML markup for render trees.
//!
//! Every node becomes an `<li class="peek-child">` with an element line
//! (name, type, summary, callback). Children sit in a `peek-nest` block that
//! starts hidden; expandable element lines toggle it with `peek.toggle`.

use std::fmt::Write;

use peek_api::{NodeKind, RenderNode};
use peek_kernel::text::escape;

use crate::skin::{Skin, TOGGLE_SCRIPT};

/// Writes render trees as nested list markup.
#[derive(Debug, Clone)]
pub struct HtmlEmitter {
    /// Show the version footnote under each tree.
    pub footnote: bool,
}

impl HtmlEmitter {
    pub fn new() -> Self {
        Self { footnote: true }
    }

    pub fn without_footnote() -> Self {
        Self { footnote: false }
    }

    /// The `<style>` and `<script>` blocks for a skin, plus any skin warning.
    pub fn assets(&self, skin: &Skin) -> String {
        let mut out = String::new();
        if let Some(warning) = &skin.warning {
            let _ = writeln!(out, "<!-- peek: {} -->", comment_safe(warning));
            let _ = writeln!(out, "<div class=\"peek-warning\">Warning: {}</div>", escape(warning));
        }
        let _ = writeln!(out, "<style type=\"text/css\">");
        out.push_str(&skin.css);
        let _ = writeln!(out, "\n/* Using peek skin: {} */", comment_safe(&skin.describe()));
        let _ = writeln!(out, "</style>");
        let _ = writeln!(out, "<script type=\"text/javascript\">");
        out.push_str(TOGGLE_SCRIPT);
        let _ = writeln!(out, "</script>");
        out
    }

    /// Markup for one tree, with its root wrapper and footnote.
    pub fn tree(&self, node: &RenderNode) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"peek-root\">\n<ul class=\"peek-node peek-first\">\n");
        self.node(node, &mut out);
        if self.footnote {
            let _ = writeln!(
                out,
                "<li class=\"peek-footnote\"><div class=\"peek-version\">Peek v{}</div></li>",
                env!("CARGO_PKG_VERSION")
            );
        }
        out.push_str("</ul>\n</div>\n");
        out
    }

    /// Markup for a title line shown above a tree.
    pub fn title(&self, title: &str) -> String {
        format!("<div class=\"peek-title\">{}</div>\n", escape(title))
    }

    fn node(&self, node: &RenderNode, out: &mut String) {
        out.push_str("<li class=\"peek-child\">\n");
        if node.expandable {
            out.push_str("<div class=\"peek-element peek-expand\" onClick=\"peek.toggle(this);\">");
        } else {
            out.push_str("<div class=\"peek-element\">");
        }

        let _ = write!(out, "<a class=\"peek-name\">{}</a> ", escape(&node.label));
        element_body(node, out);
        if let Some(callback) = &node.callback {
            let _ = write!(
                out,
                "<span class=\"peek-callback\"> | (<em class=\"peek-type\">Callback</em>) \
                 <strong class=\"peek-string\">{};</strong></span>",
                callback
            );
        }
        out.push_str("</div>\n");

        if node.expandable {
            out.push_str("<div class=\"peek-nest\" style=\"display:none;\">\n<ul class=\"peek-node\">\n");
            if node.kind == NodeKind::Text {
                for preview in &node.children {
                    let _ = writeln!(
                        out,
                        "<li class=\"peek-child\"><div class=\"peek-preview\">{}</div></li>",
                        preview.summary
                    );
                }
            } else {
                for child in &node.children {
                    self.node(child, out);
                }
            }
            out.push_str("</ul>\n</div>\n");
        }
        out.push_str("</li>\n");
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

// Summaries and details arrive escaped from the kernel.
fn element_body(node: &RenderNode, out: &mut String) {
    let type_name = node.kind.type_name();
    let _ = match node.kind {
        NodeKind::Null => write!(out, "(<em class=\"peek-type peek-null\">{}</em>)", type_name),
        NodeKind::Recursion => write!(
            out,
            "(<em class=\"peek-type\">{}</em>) <big>&#8734;</big>",
            type_name
        ),
        NodeKind::Container => write!(
            out,
            "(<em class=\"peek-type\">{}, <strong class=\"peek-array-length\">{}</strong></em>)",
            type_name, node.summary
        ),
        NodeKind::Record => write!(
            out,
            "(<em class=\"peek-type\">{}</em>) <strong class=\"peek-class\">{}</strong>",
            type_name, node.summary
        ),
        NodeKind::Text => write!(
            out,
            "(<em class=\"peek-type\">{}, <strong class=\"peek-string-length\">{}</strong></em>) \
             <strong class=\"peek-string\">{}</strong>",
            type_name,
            node.detail.as_deref().unwrap_or_default(),
            node.summary
        ),
        NodeKind::Boolean | NodeKind::Integer | NodeKind::Float | NodeKind::Resource => write!(
            out,
            "(<em class=\"peek-type\">{}</em>) <strong class=\"peek-{}\">{}</strong>",
            type_name,
            type_name.to_lowercase(),
            node.summary
        ),
    };
}

fn comment_safe(s: &str) -> String {
    s.replace("--", "- -")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> RenderNode {
        RenderNode::leaf("root <x>", NodeKind::Container, "2 elements").with_children(vec![
            RenderNode::leaf("a", NodeKind::Integer, "1"),
            RenderNode::leaf("self", NodeKind::Recursion, "Recursion"),
        ])
    }

    #[test]
    fn test_tree_markup() {
        let html = HtmlEmitter::new().tree(&container());
        assert!(html.starts_with("<div class=\"peek-root\">"));
        assert!(html.contains("peek-expand"));
        assert!(html.contains("onClick=\"peek.toggle(this);\""));
        assert!(html.contains("<a class=\"peek-name\">root &lt;x&gt;</a>"));
        assert!(html.contains("Array, <strong class=\"peek-array-length\">2 elements</strong>"));
        assert!(html.contains("<strong class=\"peek-integer\">1</strong>"));
        assert!(html.contains("&#8734;"));
        assert!(html.contains("style=\"display:none;\""));
        assert!(html.contains("peek-footnote"));
    }

    #[test]
    fn test_leaf_is_not_toggleable() {
        let html = HtmlEmitter::new().tree(&RenderNode::leaf("n", NodeKind::Null, ""));
        assert!(!html.contains("peek.toggle"));
        assert!(html.contains("peek-null"));
        assert!(!html.contains("peek-nest"));
    }

    #[test]
    fn test_truncated_text_preview() {
        let node = RenderNode::leaf("s", NodeKind::Text, "abc...")
            .with_detail("60 characters")
            .with_children(vec![RenderNode::leaf("", NodeKind::Text, "abcdef")]);
        let html = HtmlEmitter::new().tree(&node);
        assert!(html.contains("<div class=\"peek-preview\">abcdef</div>"));
        assert!(html.contains("60 characters"));
        assert!(!html.contains("<a class=\"peek-name\"></a>"));
    }

    #[test]
    fn test_callback_span() {
        let node = RenderNode::leaf("f", NodeKind::Text, "strlen")
            .with_callback(Some("strlen()".to_string()));
        let html = HtmlEmitter::new().tree(&node);
        assert!(html.contains("peek-callback"));
        assert!(html.contains("strlen();"));
    }

    #[test]
    fn test_assets_include_warning() {
        let mut skin = Skin::builtin();
        skin.warning = Some("skin <blue> -- missing".to_string());
        let assets = HtmlEmitter::new().assets(&skin);
        assert!(assets.contains("<!-- peek: skin <blue> - - missing -->"));
        assert!(assets.contains("Warning: skin &lt;blue&gt;"));
        assert!(assets.contains("<style type=\"text/css\">"));
        assert!(assets.contains("peek.toggle") || assets.contains("\"toggle\""));
    }
}
