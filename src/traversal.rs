//! Lazy walks over the nodes of a subtree.
//!
//! Both iterators keep an explicit stack of node handles instead of recursing, so walking a
//! degenerate tree only costs heap space. Each call to [`TreeNode::in_order`] or
//! [`TreeNode::preorder`] starts a fresh walk.

use std::iter::FusedIterator;

use crate::node::TreeNode;

/// Yields the nodes of a subtree in ascending order of their values.
///
/// Created by [`TreeNode::in_order`].
pub struct InOrder<T> {
    // Nodes whose left subtree has been queued but which haven't been yielded yet.
    stack: Vec<TreeNode<T>>,
}

impl<T> InOrder<T> {
    pub(crate) fn new(root: TreeNode<T>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(Some(root));
        walk
    }

    fn push_left_spine(&mut self, mut next: Option<TreeNode<T>>) {
        while let Some(node) = next {
            next = node.left();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for InOrder<T> {
    type Item = TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<T> {}

/// Yields every node of a subtree before any of its descendants, left subtrees before right
/// ones.
///
/// Created by [`TreeNode::preorder`].
pub struct Preorder<T> {
    stack: Vec<TreeNode<T>>,
}

impl<T> Preorder<T> {
    pub(crate) fn new(root: TreeNode<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<T> Iterator for Preorder<T> {
    type Item = TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for Preorder<T> {}
