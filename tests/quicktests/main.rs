//! Property tests for the public set API.

mod algebra;
mod set;

use bst_set::TreeNode;

/// Walks every node below `root` checking the order and parent-link invariants and returns how
/// many nodes there are.
pub(crate) fn checked_size<T: Ord>(root: &TreeNode<T>) -> usize {
    let mut count = 0;
    for node in root.preorder() {
        count += 1;
        for child in node.children() {
            if !child.parent().map_or(false, |parent| parent.ptr_eq(&node)) {
                return usize::MAX;
            }
        }
        if let Some(left) = node.left() {
            if *left.maximum().value() >= *node.value() {
                return usize::MAX;
            }
        }
        if let Some(right) = node.right() {
            if *right.minimum().value() <= *node.value() {
                return usize::MAX;
            }
        }
    }
    count
}
