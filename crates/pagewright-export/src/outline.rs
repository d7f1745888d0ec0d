//! Forest visualization as ASCII tree.
//!
//! ```text
//! work-area-1/
//! ├─ header#0192f3a1 "Header"
//! └─ section#0192f3a2
//!    └─ banner#0192f3a3 "Banner"
//! ```

use pagewright_tree::{Forest, PlacedInstance};

/// Format a forest as ASCII tree lines, one block per container.
///
/// Nodes deeper than `max_depth` (0 = directly inside a container) are left out.
pub fn format_outline(forest: &Forest, max_depth: Option<usize>) -> Vec<String> {
    let mut lines = Vec::new();

    for (name, nodes) in forest.containers() {
        lines.push(format!("{}/", name));
        for (idx, node) in nodes.iter().enumerate() {
            let is_last = idx == nodes.len() - 1;
            format_node(node, 0, "", is_last, max_depth, &mut lines);
        }
    }

    lines
}

/// Recursively format a node and its children.
fn format_node(
    node: &PlacedInstance,
    depth: usize,
    prefix: &str,
    is_last: bool,
    max_depth: Option<usize>,
    lines: &mut Vec<String>,
) {
    if let Some(max) = max_depth {
        if depth > max {
            return;
        }
    }

    let connector = if is_last { "└─ " } else { "├─ " };
    let summary = format_content_summary(node.payload().as_str(), 40);

    let line = if summary.is_empty() {
        format!("{}{}{}#{}", prefix, connector, node.kind(), node.id().short())
    } else {
        format!(
            "{}{}{}#{} \"{}\"",
            prefix,
            connector,
            node.kind(),
            node.id().short(),
            summary
        )
    };
    lines.push(line);

    let child_prefix = if is_last {
        format!("{}   ", prefix)
    } else {
        format!("{}│  ", prefix)
    };

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        format_node(child, depth + 1, &child_prefix, is_last_child, max_depth, lines);
    }
}

/// Format content as a truncated summary.
fn format_content_summary(content: &str, max_chars: usize) -> String {
    // First line only
    let first_line = content.lines().next().unwrap_or("");
    let trimmed = first_line.trim();

    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}
