//! A recursive BST. Every operation walks down from the root, one `Node` per call,
//! and each `Node` exclusively owns its two (possibly empty) children.
//!
//! # Examples
//!
//! ```
//! use search_tree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//!
//! assert!(tree.insert(5));
//! assert!(tree.contains(&5));
//!
//! // Inserting an equal element a second time leaves the tree alone.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.size(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::iter::{IntoIter, Iter};

/// An owned, possibly empty, child of a `Node` (or the root of a `Tree`).
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique elements. This can be used for inserting
/// elements, checking membership, and visiting the elements in sorted order.
/// Nothing is ever removed from the tree.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Unlink nodes with an explicit stack; the default recursive drop would overflow on a
    // long chain.
    fn drop(&mut self) {
        dismantle(self.root.take().into_iter().collect());
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree by inserting each element in sequence order. Later duplicates
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::recursive::Tree;
    ///
    /// let tree = Tree::of([5, 3, 8, 3]);
    ///
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.extend(elements);
        debug_log!(size = tree.size, "built tree from sequence");
        tree
    }

    /// Inserts `element` unless an equal element is already present.
    ///
    /// Returns `true` if a new node was created and `false` if the element
    /// already existed, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(element),
            None => {
                self.root = Some(Node::new_boxed(element));
                true
            }
        };

        if inserted {
            self.size += 1;
            trace_log!(size = self.size, "created node");
        } else {
            trace_log!(size = self.size, "element already present");
        }
        inserted
    }

    /// Like [`insert`][Tree::insert] but for callers that may not have an element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AbsentElement`] when `element` is `None`. The tree is not
    /// touched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(Some(1)), Ok(true));
    /// assert_eq!(tree.try_insert(None), Err(TreeError::AbsentElement));
    /// ```
    pub fn try_insert(&mut self, element: Option<T>) -> Result<bool, TreeError>
    where
        T: Ord,
    {
        let element = element.ok_or_else(absent_element)?;
        Ok(self.insert(element))
    }

    /// Returns whether an element equal to `element` is stored in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::recursive::Tree;
    ///
    /// let tree = Tree::of([5, 3, 8]);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.root
            .as_ref()
            .map_or(false, |root| root.contains(element))
    }

    /// Like [`contains`][Tree::contains] but for callers that may not have an element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AbsentElement`] when `element` is `None`, whatever the
    /// state of the tree.
    pub fn try_contains(&self, element: Option<&T>) -> Result<bool, TreeError>
    where
        T: Ord,
    {
        let element = element.ok_or_else(absent_element)?;
        Ok(self.contains(element))
    }

    /// Returns the number of elements in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// Both an empty tree and a tree with a single element have a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::recursive::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().depth(), 0);
    /// assert_eq!(Tree::of([1]).depth(), 0);
    /// assert_eq!(Tree::of([1, 2, 3, 4]).depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        match &self.root {
            None => 0,
            Some(root) => root.height() - 1,
        }
    }

    /// Calls `visitor` once per element, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::recursive::Tree;
    ///
    /// let tree = Tree::of([5, 3, 8, 1, 4]);
    /// let mut visited = Vec::new();
    /// tree.in_order_traversal(|x| visited.push(*x));
    ///
    /// assert_eq!(visited, [1, 3, 4, 5, 8]);
    /// ```
    pub fn in_order_traversal<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = &self.root {
            root.in_order(&mut visitor);
        }
    }

    /// Returns a lazy iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.size)
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.size)
    }
}

fn absent_element() -> TreeError {
    warn_log!("rejected absent element");
    TreeError::AbsentElement
}

/// Drops every node reachable from `stack` without recursing.
pub(crate) fn dismantle<T>(mut stack: Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// A `Node` holds one element and owns up to two children. It is created once,
/// when its element is first inserted, and never moves afterwards.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Inserts `element` somewhere below this node, creating a leaf in the first
    /// empty slot along the search path.
    fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let child = match element.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
            Ordering::Equal => return false,
        };

        if let Some(node) = child.as_mut() {
            return node.insert(element);
        }
        *child = Some(Self::new_boxed(element));
        true
    }

    fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        let child = match element.cmp(&self.value) {
            Ordering::Less => &self.left,
            Ordering::Greater => &self.right,
            Ordering::Equal => return true,
        };

        child.as_ref().map_or(false, |node| node.contains(element))
    }

    /// How many nodes are on the longest path down from this node.
    /// A node with no children has a height of 1.
    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height());
        let right = self.right.as_ref().map_or(0, |node| node.height());
        1 + left.max(right)
    }

    fn in_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = &self.left {
            left.in_order(visitor);
        }
        visitor(&self.value);
        if let Some(right) = &self.right {
            right.in_order(visitor);
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`, checking
    /// that both agree after every step.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
    where
        T: Ord + Clone,
    {
        ops.iter().all(|op| {
            let agrees = match op {
                Op::Insert(x) => bst.insert(x.clone()) == set.insert(x.clone()),
                Op::Contains(x) => bst.contains(x) == set.contains(x),
                Op::Traverse => bst.iter().eq(set.iter()),
            };
            agrees && bst.size() == set.len()
        })
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set)
        }
    }

    quickcheck::quickcheck! {
        fn ordering_invariant(xs: Vec<i16>) -> bool {
            let tree = Tree::of(xs);
            super::tests::ordered(&tree.root, None, None)
        }
    }

    quickcheck::quickcheck! {
        fn depth_is_bounded_by_size(xs: Vec<i8>) -> bool {
            let tree = Tree::of(xs);
            tree.is_empty() || tree.depth() < tree.size()
        }
    }
}
