//! Plain-text trees for terminals.

use std::fmt::Write;

use peek_api::{NodeKind, RenderNode};

/// Writes render trees as indented text, one node per line.
#[derive(Debug, Clone)]
pub struct TextEmitter {
    pub indent: usize,
}

impl TextEmitter {
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    pub fn tree(&self, node: &RenderNode) -> String {
        let mut out = String::new();
        self.node(node, 0, &mut out);
        out
    }

    fn node(&self, node: &RenderNode, depth: usize, out: &mut String) {
        let pad = " ".repeat(depth * self.indent);
        let type_name = node.kind.type_name();
        let summary = unescape(&node.summary);
        let _ = match (&node.detail, node.kind) {
            (_, NodeKind::Null) => write!(out, "{pad}{} ({type_name})", node.label),
            (_, NodeKind::Recursion) => write!(out, "{pad}{} ({type_name}) \u{221e}", node.label),
            (Some(detail), _) => write!(out, "{pad}{} ({type_name}, {detail}) {summary}", node.label),
            (None, NodeKind::Container) => write!(out, "{pad}{} ({type_name}, {summary})", node.label),
            (None, _) => write!(out, "{pad}{} ({type_name}) {summary}", node.label),
        };
        if let Some(callback) = &node.callback {
            let _ = write!(out, " | (Callback) {};", unescape(callback));
        }
        out.push('\n');

        if node.kind == NodeKind::Text {
            let pad = " ".repeat((depth + 1) * self.indent);
            for preview in &node.children {
                let _ = writeln!(out, "{pad}| {}", unescape(&preview.summary));
            }
            return;
        }
        for child in &node.children {
            self.node(child, depth + 1, out);
        }
    }
}

impl Default for TextEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Undo the kernel's markup escaping for terminal output.
pub fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_tree() {
        let node = RenderNode::leaf("root", NodeKind::Container, "3 elements").with_children(vec![
            RenderNode::leaf("a", NodeKind::Integer, "1"),
            RenderNode::leaf("b", NodeKind::Text, "&lt;b&gt;").with_detail("3 characters"),
            RenderNode::leaf("self", NodeKind::Recursion, "Recursion"),
        ]);
        let text = TextEmitter::new().tree(&node);
        assert_eq!(
            text,
            "root (Array, 3 elements)\n  a (Integer) 1\n  b (String, 3 characters) <b>\n  self (Recursion) \u{221e}\n"
        );
    }

    #[test]
    fn test_preview_lines() {
        let node = RenderNode::leaf("s", NodeKind::Text, "ab...")
            .with_detail("6 characters")
            .with_children(vec![RenderNode::leaf("", NodeKind::Text, "abcdef")]);
        let text = TextEmitter::new().tree(&node);
        assert_eq!(text, "s (String, 6 characters) ab...\n  | abcdef\n");
    }

    #[test]
    fn test_unescape_round_trip() {
        let raw = "<a href=\"x\">'&'</a>";
        assert_eq!(unescape(&peek_kernel::text::escape(raw)), raw);
    }
}
