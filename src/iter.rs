//! Lazy in-order iterators over a [`Tree`][crate::Tree].
//!
//! Both iterators keep an explicit stack holding the path of nodes whose left
//! subtree is being visited, so only `O(depth)` extra memory is used. Neither
//! can be restarted; ask the tree for a new one instead.

use std::iter::FusedIterator;

use crate::recursive::{dismantle, Node};

/// Borrowing iterator over the elements of a tree in ascending order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
///
/// # Examples
///
/// ```
/// use search_tree::Tree;
///
/// let tree = Tree::of([5, 3, 8, 1, 4]);
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
/// ```
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, size: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: size,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over the elements of a tree in ascending order.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>, size: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: size,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and its chain of left descendants, detaching each left
    /// child as it goes so every stacked node has an empty left slot.
    fn push_left_spine(&mut self, mut node: Option<Box<Node<T>>>) {
        while let Some(mut n) = node {
            node = n.left.take();
            self.stack.push(n);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.stack.pop()?;
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.stack));
    }
}
