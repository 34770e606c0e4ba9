//! A single node of an unbalanced binary search tree.
//!
//! A [`TreeNode`] is a handle to a node. Cloning the handle does not copy the node, it gives
//! another way to reach the same node. Children are owned by their parent through strong links
//! while the link back up to the parent is weak, so a tree is released as soon as nothing holds
//! on to its root.
//!
//! Outside this crate a handle only reads: the tree is reshaped by [`TreeSet`][crate::TreeSet],
//! which keeps its count in step with the nodes it owns.
//!
//! # Examples
//!
//! ```
//! use bst_set::TreeSet;
//!
//! let set = TreeSet::from([5, 3, 8]);
//! let root = set.root().unwrap();
//!
//! let eight = root.search(&8).unwrap();
//! assert!(eight.parent().unwrap().ptr_eq(root));
//! assert!(eight.is_leaf());
//! assert_eq!(*root.minimum().value(), 3);
//! ```

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;

use crate::error::NilValueError;
use crate::traversal::{InOrder, Preorder};
use crate::util::Side;

struct Node<T> {
    value: T,
    left: Option<TreeNode<T>>,
    right: Option<TreeNode<T>>,
    // Reset to an empty `Weak` whenever this node is detached from its parent.
    parent: Weak<RefCell<Node<T>>>,
}

impl<T> Node<T> {
    fn slot(&self, side: Side) -> &Option<TreeNode<T>> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<TreeNode<T>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Finds which slot, if any, holds exactly `child`.
    fn side_of(&self, child: &TreeNode<T>) -> Option<Side> {
        let holds = |slot: &Option<TreeNode<T>>| slot.as_ref().map_or(false, |n| n.ptr_eq(child));
        if holds(&self.left) {
            Some(Side::Left)
        } else if holds(&self.right) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

// Children are released with an explicit stack so that dropping a degenerate tree doesn't recurse
// once per level. A child still held elsewhere only loses one strong count and keeps its subtree.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<TreeNode<T>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(TreeNode(node)) = stack.pop() {
            if let Ok(node) = Rc::try_unwrap(node) {
                let mut node = node.into_inner();
                stack.extend(node.left.take());
                stack.extend(node.right.take());
            }
        }
    }
}

/// A handle to one node of a binary search tree.
///
/// Nodes are linked so that every value in a node's left subtree is less than its own value and
/// every value in its right subtree is greater. Equal values never coexist.
pub struct TreeNode<T>(Rc<RefCell<Node<T>>>);

/// Cloning a `TreeNode` clones the handle, not the node.
impl<T> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> TryFrom<Option<T>> for TreeNode<T> {
    type Error = NilValueError;

    fn try_from(value: Option<T>) -> Result<Self, Self::Error> {
        value.map(Self::new).ok_or(NilValueError)
    }
}

impl<T> fmt::Debug for TreeNode<T>
where
    T: fmt::Debug,
{
    // Only the immediate children are shown so degenerate trees don't recurse deeply.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        let left = node.left.as_ref().map(TreeNode::value);
        let right = node.right.as_ref().map(TreeNode::value);
        f.debug_struct("TreeNode")
            .field("value", &node.value)
            .field("left", &left)
            .field("right", &right)
            .field("is_root", &node.parent.upgrade().is_none())
            .finish()
    }
}

impl<T> TreeNode<T> {
    /// Creates a detached leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Node {
            value,
            left: None,
            right: None,
            parent: Weak::new(),
        })))
    }

    /// Borrows the value stored in this node.
    ///
    /// ## Panics
    ///
    /// If the node is being restructured while the borrow is taken, e.g. a `Ref` from this method
    /// is still alive while a [`TreeSet`][crate::TreeSet] deletion relabels the node.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.0.borrow(), |node| &node.value)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<Self> {
        self.0.borrow().left.clone()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<Self> {
        self.0.borrow().right.clone()
    }

    /// The node holding this one as a child, if any.
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.0.borrow();
        node.left.is_none() && node.right.is_none()
    }

    /// The present children, left before right.
    pub fn children(&self) -> Vec<Self> {
        let node = self.0.borrow();
        let children = node.left.iter().chain(node.right.iter()).cloned().collect();
        children
    }

    /// Follows parent links up to the root of the tree this node belongs to.
    pub fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// The leftmost (smallest) node of the subtree rooted here.
    pub fn minimum(&self) -> Self {
        self.extreme(Side::Left)
    }

    /// The rightmost (largest) node of the subtree rooted here.
    pub fn maximum(&self) -> Self {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Self {
        let mut current = self.clone();
        loop {
            let next = current.0.borrow().slot(side).clone();
            match next {
                Some(next) => current = next,
                None => return current,
            }
        }
    }

    /// Visits the subtree rooted here in ascending order: left subtree, this node, right subtree.
    pub fn in_order(&self) -> InOrder<T> {
        InOrder::new(self.clone())
    }

    /// Visits the subtree rooted here with every node before its descendants: this node, left
    /// subtree, right subtree.
    ///
    /// Re-inserting values in this order into an empty tree rebuilds the same shape.
    pub fn preorder(&self) -> Preorder<T> {
        Preorder::new(self.clone())
    }

    /// Detaches `child` from this node. Does nothing if `child` isn't one of this node's children.
    pub(crate) fn remove_child(&self, child: &Self) {
        self.replace_child(child, None);
    }

    /// Puts `replacement` in the slot currently holding `child` and detaches `child`. Does nothing
    /// if `child` isn't one of this node's children.
    ///
    /// `replacement` must be detached, or already be `child` or one of its children.
    pub(crate) fn replace_child(&self, child: &Self, replacement: Option<Self>) {
        if cfg!(debug_assertions) {
            if let Some(replacement) = &replacement {
                let parent = replacement.parent();
                assert!(
                    replacement.ptr_eq(child) || parent.map_or(true, |p| p.ptr_eq(child)),
                    "replacement node is still attached elsewhere"
                );
            }
        }

        let (side, detached) = {
            let mut node = self.0.borrow_mut();
            let Some(side) = node.side_of(child) else {
                return;
            };
            (side, std::mem::replace(node.slot_mut(side), replacement.clone()))
        };

        // Detach first so that replacing a child with itself leaves it attached.
        if let Some(detached) = detached {
            detached.0.borrow_mut().parent = Weak::new();
        }
        if let Some(replacement) = &replacement {
            replacement.0.borrow_mut().parent = Rc::downgrade(&self.0);
        }
        trace!(
            "rewired {:?} child (replacement present: {})",
            side,
            replacement.is_some()
        );
    }

    /// Takes this node's value out of the tree it belongs to and returns the root of what is
    /// left, or `None` if the tree is now empty.
    ///
    /// A node with at most one child is detached and its child, if any, takes its place. A node
    /// with two children stays where it is: its value is swapped for its in-order successor's and
    /// the successor node is detached instead.
    pub(crate) fn remove(&self) -> Option<Self> {
        let successor_subtree = {
            let node = self.0.borrow();
            let right = node.left.as_ref().and(node.right.clone());
            right
        };
        if let Some(right) = successor_subtree {
            let successor = right.minimum();
            {
                let mut node = self.0.borrow_mut();
                let mut successor_node = successor.0.borrow_mut();
                std::mem::swap(&mut node.value, &mut successor_node.value);
            }
            trace!("promoted in-order successor into a node with two children");
            // The successor has no left child so this is one of the cases below.
            return successor.remove();
        }

        let child = {
            let mut node = self.0.borrow_mut();
            let child = node.left.take().or_else(|| node.right.take());
            child
        };
        match (self.parent(), child) {
            (None, None) => {
                trace!("removed the only node of a tree");
                None
            }
            (None, Some(child)) => {
                child.0.borrow_mut().parent = Weak::new();
                trace!("promoted the only child of the root");
                Some(child)
            }
            (Some(parent), child) => {
                trace!("detached a node (child promoted: {})", child.is_some());
                parent.replace_child(self, child);
                Some(parent.root())
            }
        }
    }
}

impl<T> TreeNode<T>
where
    T: Ord,
{
    /// Attaches `node` below this one, walking left past greater values and right past smaller
    /// ones until a free slot turns up. Returns `false` without touching the tree if a node with
    /// an equal value is already there.
    ///
    /// `node` must be detached; its own children, if any, travel with it.
    pub(crate) fn insert(&self, node: Self) -> bool {
        if cfg!(debug_assertions) {
            assert!(node.is_root(), "inserted node is still attached elsewhere");
        }

        let mut current = self.clone();
        loop {
            let ordering = T::cmp(&node.value(), &current.value());
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Equal => return false,
                Ordering::Greater => Side::Right,
            };

            let next = current.0.borrow().slot(side).clone();
            match next {
                Some(child) => current = child,
                None => {
                    node.0.borrow_mut().parent = Rc::downgrade(&current.0);
                    *current.0.borrow_mut().slot_mut(side) = Some(node);
                    trace!("attached node as {:?} child", side);

                    if cfg!(debug_assertions) {
                        current.assert_child_order();
                    }
                    return true;
                }
            }
        }
    }

    /// Finds the node holding a value equal to `value` in the subtree rooted here.
    pub fn search<Q>(&self, value: &Q) -> Option<Self>
    where
        T: std::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.clone();
        loop {
            let ordering = value.cmp(<T as std::borrow::Borrow<Q>>::borrow(&current.value()));
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Some(current),
                Ordering::Greater => Side::Right,
            };

            let next = current.0.borrow().slot(side).clone();
            current = next?;
        }
    }

    fn assert_child_order(&self) {
        let node = self.0.borrow();
        if let Some(left) = &node.left {
            assert!(*left.value() < node.value);
        }
        if let Some(right) = &node.right {
            assert!(*right.value() > node.value);
        }
    }
}
