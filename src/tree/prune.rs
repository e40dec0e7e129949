use super::TreeNode;

/// Drop every subtree whose count is below `min_count`.
///
/// Children are resolved first. A node that meets the threshold is kept even
/// if all of its children were dropped. Returns `None` when `node` itself is
/// below the threshold.
pub fn prune(mut node: TreeNode, min_count: usize) -> Option<TreeNode> {
    node.children = std::mem::take(&mut node.children)
        .into_iter()
        .filter_map(|(name, child)| prune(child, min_count).map(|kept| (name, kept)))
        .collect();

    if node.count < min_count {
        return None;
    }
    Some(node)
}
