use super::TreeNode;
use std::collections::HashMap;

/// Merge runs of single-child nodes into one node named `a/b/c`.
///
/// Follows the only child while there is exactly one, then recurses into the
/// children of the node it stopped at. Counts are those of the stopping node.
pub fn collapse_chains(mut name: String, mut node: TreeNode) -> (String, TreeNode) {
    while node.children.len() == 1 {
        let Some((child_name, child)) = node.children.drain().next() else {
            break;
        };
        name = if name.is_empty() {
            child_name
        } else {
            format!("{name}/{child_name}")
        };
        node = child;
    }

    let children: HashMap<String, TreeNode> = node
        .children
        .into_iter()
        .map(|(child_name, child)| collapse_chains(child_name, child))
        .collect();
    (
        name,
        TreeNode {
            count: node.count,
            children,
        },
    )
}
