//! Text and JSON rendering of a pruned tree.

use crate::tree::{is_leaf_name, PrunedTree, TreeNode, ROOT};
use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Reverse;

/// Configuration for both renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Use ASCII connectors instead of box drawing.
    pub ascii: bool,
    /// Append ` [count]` to every text line.
    pub show_counts: bool,
    /// Deepest level expanded (root = 0). 0 means unlimited.
    pub max_depth: usize,
    /// Children shown per level. 0 means unlimited.
    pub top: usize,
    /// Collapse single-child chains before rendering.
    pub compact: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ascii: false,
            show_counts: true,
            max_depth: 0,
            top: 0,
            compact: false,
        }
    }
}

/// Connector strings for one tree-drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub tee: &'static str,
    pub corner: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Glyphs {
    pub const fn unicode() -> Self {
        Self {
            tee: "\u{251c}\u{2500}\u{2500} ",    // ├──
            corner: "\u{2514}\u{2500}\u{2500} ", // └──
            pipe: "\u{2502}   ",                 // │
            blank: "    ",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            tee: "|-- ",
            corner: "`-- ",
            pipe: "|   ",
            blank: "    ",
        }
    }
}

/// Children in display order: directories before buckets, then descending
/// count, then ascending name.
pub fn sorted_children(node: &TreeNode) -> Vec<(&str, &TreeNode)> {
    let mut items: Vec<(&str, &TreeNode)> = node
        .children
        .iter()
        .map(|(name, child)| (name.as_str(), child))
        .collect();
    items.sort_by_key(|&(name, child)| (is_leaf_name(name), Reverse(child.count), name));
    items
}

fn visible_children(node: &TreeNode, top: usize) -> Vec<(&str, &TreeNode)> {
    let mut items = sorted_children(node);
    if top > 0 {
        items.truncate(top);
    }
    items
}

fn expands(depth: usize, max_depth: usize) -> bool {
    max_depth == 0 || depth < max_depth
}

fn working_root<'a>(root: &'a TreeNode, config: &RenderConfig) -> Cow<'a, TreeNode> {
    if config.compact {
        Cow::Owned(root.collapsed())
    } else {
        Cow::Borrowed(root)
    }
}

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn label(name: &str, count: usize, show_counts: bool) -> String {
    let name = sanitize_terminal_text(name);
    if show_counts {
        format!("{name} [{count}]")
    } else {
        name
    }
}

/// Render the tree as indented text lines. Empty when there is nothing to render.
pub fn render_text(tree: &PrunedTree, config: &RenderConfig) -> Vec<String> {
    let Some(root) = tree.root() else {
        return Vec::new();
    };
    let working = working_root(root, config);
    let glyphs = if config.ascii {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    };

    let mut lines = vec![label(ROOT, working.count, config.show_counts)];
    push_children(&working, "", 1, config, &glyphs, &mut lines);
    lines
}

fn push_children(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    config: &RenderConfig,
    glyphs: &Glyphs,
    lines: &mut Vec<String>,
) {
    let items = visible_children(node, config.top);
    let last = items.len().saturating_sub(1);
    for (i, (name, child)) in items.into_iter().enumerate() {
        let is_last = i == last;
        let connector = if is_last { glyphs.corner } else { glyphs.tee };
        lines.push(format!(
            "{prefix}{connector}{}",
            label(name, child.count, config.show_counts)
        ));

        if !expands(depth, config.max_depth) {
            continue;
        }
        let continuation = if is_last { glyphs.blank } else { glyphs.pipe };
        let child_prefix = format!("{prefix}{continuation}");
        push_children(child, &child_prefix, depth + 1, config, glyphs, lines);
    }
}

/// One node of the JSON summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonNode {
    pub name: String,
    pub count: usize,
    pub children: Vec<JsonNode>,
}

/// Build the JSON summary. A node at the depth limit is present with an
/// empty `children` list. `None` when there is nothing to render.
pub fn render_json(tree: &PrunedTree, config: &RenderConfig) -> Option<JsonNode> {
    let root = tree.root()?;
    let working = working_root(root, config);
    Some(json_node(ROOT, &working, 0, config))
}

fn json_node(name: &str, node: &TreeNode, depth: usize, config: &RenderConfig) -> JsonNode {
    let children = if expands(depth, config.max_depth) {
        visible_children(node, config.top)
            .into_iter()
            .map(|(child_name, child)| json_node(child_name, child, depth + 1, config))
            .collect()
    } else {
        Vec::new()
    };
    JsonNode {
        name: name.to_string(),
        count: node.count,
        children,
    }
}
