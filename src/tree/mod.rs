//! Counted trie construction, pruning, and chain collapsing.

mod collapse;
mod normalize;
mod prune;

use crate::input::PathFilter;
use std::collections::HashMap;

pub use collapse::collapse_chains;
pub use normalize::{ext_bucket, path_to_segments, STAR};
pub use prune::prune;

/// Segment naming the filesystem root. Every normalized path starts with it,
/// so the trie root has a single `/` child holding the whole tree.
pub const ROOT: &str = "/";

/// How the extension-bucket leaf is derived from a basename.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtMode {
    /// Last suffix only (`report.tar.gz` -> `*.gz`).
    #[default]
    Last,
    /// Everything after the first dot (`report.tar.gz` -> `*.tar.gz`).
    Full,
    /// Ignore extensions (always `*`).
    Star,
}

/// Whether a node name has extension-bucket shape (`*` or `*.<ext>`).
pub fn is_leaf_name(name: &str) -> bool {
    name == STAR || name.starts_with("*.")
}

/// One path prefix and the number of input paths passing through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Paths whose segment sequence visits this node.
    pub count: usize,
    /// Children keyed by segment name (unordered).
    pub children: HashMap<String, TreeNode>,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TreeNode::node_count).sum::<usize>()
    }

    /// Return a copy of this node whose children have had single-child
    /// chains merged. `self` is left untouched; the node itself keeps its
    /// name even when it has exactly one child.
    pub fn collapsed(&self) -> TreeNode {
        let children = self
            .children
            .iter()
            .map(|(name, child)| collapse_chains(name.clone(), child.clone()))
            .collect();
        TreeNode {
            count: self.count,
            children,
        }
    }
}

/// Mutable build phase: accumulates paths into a counted trie.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TreeNode,
    mode: ExtMode,
}

impl TrieBuilder {
    pub fn new(mode: ExtMode) -> Self {
        Self {
            root: TreeNode::new(),
            mode,
        }
    }

    /// Record one segment sequence. The root is incremented, then every
    /// segment (the leading `ROOT` marker included) names a child one level
    /// deeper.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S]) {
        let mut cur = &mut self.root;
        cur.count += 1;

        for segment in segments {
            cur = cur
                .children
                .entry(segment.as_ref().to_string())
                .or_default();
            cur.count += 1;
        }
    }

    /// Normalize a raw path under this builder's extension mode and insert it.
    pub fn insert_path(&mut self, path: &str) {
        let segments = path_to_segments(path, self.mode);
        self.insert(&segments);
    }

    /// Insert every path the filter accepts. Returns how many were accepted.
    pub fn extend<I, S>(&mut self, paths: I, filter: &PathFilter) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        let mut rejected = 0;
        for path in paths {
            let path = path.as_ref();
            if filter.accepts(path) {
                self.insert_path(path);
                accepted += 1;
            } else {
                tracing::trace!(path, "path rejected by filter");
                rejected += 1;
            }
        }
        tracing::debug!(accepted, rejected, "paths ingested");
        accepted
    }

    /// Root of the trie built so far.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// End the build phase, pruning subtrees whose count is below `min_count`.
    pub fn finish(self, min_count: usize) -> PrunedTree {
        let total = self.root.count;
        let root = prune(self.root, min_count);
        tracing::debug!(
            total,
            min_count,
            nodes = root.as_ref().map_or(0, TreeNode::node_count),
            "tree pruned"
        );
        PrunedTree { root }
    }
}

/// Read-only result of the build phase, shared by every renderer and the
/// filter deriver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrunedTree {
    root: Option<TreeNode>,
}

impl PrunedTree {
    /// The root, or `None` when there is nothing to render: the root was
    /// pruned away or no child survived.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref().filter(|root| !root.children.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_none()
    }
}
