//! Suggested path-glob filters derived from the shape of a pruned tree.

use crate::tree::{is_leaf_name, PrunedTree, TreeNode, ROOT};
use std::collections::BTreeSet;

/// Which kind of filter patterns to suggest.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Directory plus `*.ext` bucket leaves.
    #[default]
    Ext,
    /// `<dir>/**` for every directory.
    Dir,
    /// Both styles.
    All,
}

impl FilterMode {
    fn wants_ext(self) -> bool {
        matches!(self, FilterMode::Ext | FilterMode::All)
    }

    fn wants_dir(self) -> bool {
        matches!(self, FilterMode::Dir | FilterMode::All)
    }
}

/// Walk the uncollapsed tree and collect filter suggestions, lexically ordered.
pub fn derive_filters(tree: &PrunedTree, mode: FilterMode) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    if let Some(root) = tree.root() {
        let mut dirs = Vec::new();
        for (name, child) in &root.children {
            walk(name, child, &mut dirs, mode, &mut out);
        }
    }
    out
}

/// `/`-rooted path of the ordinary components in `dirs`.
fn dir_path(dirs: &[&str]) -> String {
    let parts: Vec<&str> = dirs.iter().copied().filter(|d| *d != ROOT).collect();
    format!("{ROOT}{}", parts.join("/"))
}

fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

fn walk<'a>(
    name: &'a str,
    node: &'a TreeNode,
    dirs: &mut Vec<&'a str>,
    mode: FilterMode,
    out: &mut BTreeSet<String>,
) {
    if is_leaf_name(name) {
        if mode.wants_ext() {
            out.insert(join(&dir_path(dirs), name));
        }
        return;
    }

    dirs.push(name);
    if mode.wants_dir() {
        out.insert(join(&dir_path(dirs), "**"));
    }
    for (child_name, child) in &node.children {
        walk(child_name, child, dirs, mode, out);
    }
    dirs.pop();
}
