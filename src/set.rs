//! An ordered set stored in an unbalanced binary search tree.
//!
//! The set owns the root [`TreeNode`] and counts its values. Every change to the shape of the
//! tree is left to the nodes themselves: the set only decides which node to start from and keeps
//! track of where the root ends up.
//!
//! # Examples
//!
//! ```
//! use bst_set::TreeSet;
//!
//! let mut set = TreeSet::from([5, 3, 8, 2, 4, 9]);
//! assert_eq!(set.to_vec(), vec![2, 3, 4, 5, 8, 9]);
//!
//! // Duplicates are ignored.
//! assert!(!set.try_add(8));
//! assert_eq!(set.len(), 6);
//!
//! let other = TreeSet::from([8, 4, 9, 10]);
//! assert_eq!((&set & &other).to_vec(), vec![4, 8, 9]);
//! assert_eq!(set.difference([8, 1, 10]).to_vec(), vec![2, 3, 4, 5, 9]);
//!
//! set.delete(&5);
//! assert!(!set.include(&5));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use log::debug;

use crate::error::NilValueError;
use crate::node::TreeNode;
use crate::traversal::InOrder;

/// A set of distinct values kept in ascending order by a binary search tree.
///
/// The tree is never rebalanced, so adding values in sorted order produces a tree as deep as the
/// set is large.
pub struct TreeSet<T> {
    root: Option<TreeNode<T>>,
    len: usize,
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node of the underlying tree, if the set isn't empty.
    ///
    /// The handle can walk and search the tree but not reshape it, so the set's count always
    /// matches its nodes.
    ///
    /// ```compile_fail
    /// use bst_set::{TreeNode, TreeSet};
    ///
    /// let set = TreeSet::from([5]);
    /// set.root().unwrap().insert(TreeNode::new(6));
    /// ```
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Removes every value.
    ///
    /// Nodes that are still referenced through a [`TreeNode`] handle keep their subtrees.
    pub fn clear(&mut self) -> &mut Self {
        self.root = None;
        if self.len > 0 {
            debug!("cleared {} values", self.len);
        }
        self.len = 0;
        self
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::TreeSet;
    ///
    /// let set = TreeSet::from([5, 3, 8]);
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), Some(5));
    /// assert_eq!(it.next(), Some(8));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.root.as_ref().map(TreeNode::in_order),
            marker: PhantomData,
        }
    }

    /// The values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().collect()
    }

    /// The smallest value.
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.root.as_ref().map(|root| root.minimum().value().clone())
    }

    /// The largest value.
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.root.as_ref().map(|root| root.maximum().value().clone())
    }

    fn nodes(&self) -> impl Iterator<Item = TreeNode<T>> + '_ {
        self.root.iter().flat_map(TreeNode::in_order)
    }
}

impl<T> TreeSet<T>
where
    T: Ord,
{
    /// Adds `value` unless an equal value is already present. Returns whether it was added.
    pub fn try_add(&mut self, value: T) -> bool {
        self.add_node(TreeNode::new(value))
    }

    /// Adds `value` unless an equal value is already present.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.try_add(value);
        self
    }

    /// Like [`try_add`][TreeSet::try_add] for a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`NilValueError`] if `value` is `None`. The set is left untouched.
    pub fn try_add_option(&mut self, value: Option<T>) -> Result<bool, NilValueError> {
        let node = TreeNode::try_from(value)?;
        Ok(self.add_node(node))
    }

    fn add_node(&mut self, node: TreeNode<T>) -> bool {
        let added = match &self.root {
            Some(root) => root.insert(node),
            None => {
                self.root = Some(node);
                true
            }
        };
        if added {
            self.len += 1;
        }
        added
    }

    /// Deletes the value equal to `value`. Returns whether there was one.
    pub fn try_delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node) = self.search(value) else {
            return false;
        };
        self.root = node.remove();
        self.len -= 1;
        true
    }

    /// Deletes the value equal to `value`, if there is one.
    pub fn delete<Q>(&mut self, value: &Q) -> &mut Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_delete(value);
        self
    }

    /// Whether a value equal to `value` is in the set.
    pub fn include<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }

    fn search<Q>(&self, value: &Q) -> Option<TreeNode<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_ref()?.search(value)
    }

    /// Deletes every value of `other` from this set.
    pub fn subtract<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for value in other {
            self.try_delete::<T>(value.borrow());
        }
        self
    }

    /// Adds every value of `other` to this set.
    pub fn merge<I>(&mut self, other: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(other);
        self
    }

    /// Whether every value of this set is also in `other`. Repeats in `other` are ignored.
    pub fn subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        // Each value of `other` found here maps to one of this set's nodes; the set is covered
        // once every node has been hit at least once.
        let mut hits: Vec<TreeNode<T>> = other
            .into_iter()
            .filter_map(|value| self.search::<T>(value.borrow()))
            .collect();
        hits.sort_by(|a, b| T::cmp(&a.value(), &b.value()));
        hits.dedup_by(|a, b| a.ptr_eq(b));
        hits.len() == self.len
    }

    /// Whether every value of `other` is also in this set.
    pub fn superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .all(|value| self.include::<T>(value.borrow()))
    }
}

impl<T> TreeSet<T>
where
    T: Ord + Clone,
{
    /// A new set of the values of `other` that are also in this set.
    pub fn intersection<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .filter_map(|value| {
                let node = self.search::<T>(value.borrow())?;
                let value = node.value().clone();
                Some(value)
            })
            .collect()
    }

    /// A new set of the values of this set followed by the values of `other`.
    pub fn union<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.iter().chain(other).collect()
    }

    /// A copy of this set without the values of `other`.
    pub fn difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut difference = self.clone();
        difference.subtract(other);
        difference
    }

    /// A new set of the values in exactly one of this set and `other`.
    pub fn symmetric_difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let other: Self = other.into_iter().collect();
        self.union(&other).difference(&self.intersection(&other))
    }
}

/// Rebuilds the tree by adding values in preorder, so the copy has the same shape as the
/// original without sharing any nodes with it.
impl<T> Clone for TreeSet<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        let mut set = Self::new();
        for node in self.root.iter().flat_map(TreeNode::preorder) {
            set.try_add(node.value().clone());
        }
        set
    }
}

impl<T> PartialEq for TreeSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.len == other.len && other.nodes().all(|node| self.include(&*node.value())))
    }
}

impl<T> Eq for TreeSet<T> where T: Ord {}

impl<T> fmt::Debug for TreeSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for node in self.nodes() {
            set.entry(&*node.value());
        }
        set.finish()
    }
}

impl<T> fmt::Display for TreeSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", node.value())?;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<T> for TreeSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for TreeSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.try_add(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for TreeSet<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a TreeSet<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> BitAnd<&TreeSet<T>> for &TreeSet<T>
where
    T: Ord + Clone,
{
    type Output = TreeSet<T>;

    fn bitand(self, rhs: &TreeSet<T>) -> TreeSet<T> {
        self.intersection(rhs)
    }
}

impl<T> BitOr<&TreeSet<T>> for &TreeSet<T>
where
    T: Ord + Clone,
{
    type Output = TreeSet<T>;

    fn bitor(self, rhs: &TreeSet<T>) -> TreeSet<T> {
        self.union(rhs)
    }
}

impl<T> Sub<&TreeSet<T>> for &TreeSet<T>
where
    T: Ord + Clone,
{
    type Output = TreeSet<T>;

    fn sub(self, rhs: &TreeSet<T>) -> TreeSet<T> {
        self.difference(rhs)
    }
}

impl<T> BitXor<&TreeSet<T>> for &TreeSet<T>
where
    T: Ord + Clone,
{
    type Output = TreeSet<T>;

    fn bitxor(self, rhs: &TreeSet<T>) -> TreeSet<T> {
        self.symmetric_difference(rhs)
    }
}

/// Ascending iterator over the values of a [`TreeSet`].
///
/// Created by [`TreeSet::iter`]. Values are cloned out of the nodes holding them.
pub struct Iter<'a, T> {
    nodes: Option<InOrder<T>>,
    marker: PhantomData<&'a TreeSet<T>>,
}

impl<T> Iterator for Iter<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.nodes.as_mut()?.next()?;
        let value = node.value().clone();
        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, T> where T: Clone {}
