//! Positions and iterators over a [`Tree`]. Both move with the tree's successor/predecessor
//! walk, so a single step is `O(height)` but a full traversal is `O(n)`.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::error::TreeError;
use crate::tree::{Link, Tree};

/// A bidirectional position in a [`Tree`]: either at one node, or at the end position which
/// holds no key.
///
/// The end position sits both past the largest key and before the smallest one, so stepping
/// forward off the maximum or backward off the minimum lands on it. The end position itself
/// cannot move.
///
/// A cursor borrows its tree. It can't outlive the tree, and the tree can't be changed while
/// the cursor exists.
///
/// # Examples
///
/// ```
/// use plain_bst::{Tree, TreeError};
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
///
/// let mut cursor = tree.begin();
/// assert_eq!(cursor.get(), Ok(&1));
///
/// cursor.move_next().unwrap();
/// cursor.move_next().unwrap();
/// assert_eq!(cursor.get(), Ok(&3));
///
/// cursor.move_next().unwrap();
/// assert_eq!(cursor, tree.end());
/// assert_eq!(cursor.get(), Err(TreeError::InvalidCursor));
/// assert_eq!(cursor.move_next(), Err(TreeError::InvalidCursor));
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    node: Link,
}

// Manual impls so a `Cursor` is `Copy` regardless of `T`.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

/// Two cursors are equal when they're in the same tree at the same node.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}
impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get().ok()).finish()
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, node: Link) -> Self {
        Self { tree, node }
    }

    /// The key at this position.
    pub fn get(&self) -> Result<&'a T, TreeError> {
        let tree = self.tree;
        let node = self.node.ok_or(TreeError::InvalidCursor)?;
        Ok(&tree.node(node).key)
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next larger key, or to the end position from the largest key.
    pub fn move_next(&mut self) -> Result<(), TreeError> {
        let node = self.node.ok_or(TreeError::InvalidCursor)?;
        self.node = self.tree.successor(node);
        Ok(())
    }

    /// Moves to the next smaller key, or to the end position from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut cursor = tree.find(&3);
    /// cursor.move_prev().unwrap();
    /// assert_eq!(cursor.get(), Ok(&2));
    ///
    /// let mut cursor = tree.begin();
    /// cursor.move_prev().unwrap();
    /// assert!(cursor.is_end());
    /// ```
    pub fn move_prev(&mut self) -> Result<(), TreeError> {
        let node = self.node.ok_or(TreeError::InvalidCursor)?;
        self.node = self.tree.predecessor(node);
        Ok(())
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order.
///
/// This `struct` is created by [`Tree::iter`]. It is lazy and can be walked from both ends.
///
/// # Examples
///
/// ```
/// use plain_bst::Tree;
///
/// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    front: Link,
    back: Link,
    // Stops the two ends from walking past each other.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, front: Link, back: Link, remaining: usize) -> Self {
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = self.front?;
        self.remaining -= 1;
        self.front = tree.successor(node);
        Some(&tree.node(node).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = self.back?;
        self.remaining -= 1;
        self.back = tree.predecessor(node);
        Some(&tree.node(node).key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
