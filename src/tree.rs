//! A plain (not self-balancing) BST. Nodes keep a link to their parent so in-order neighbours
//! can be found from any node without a stack, which is what drives [`Cursor`] and [`Iter`].
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_end());
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1).get(), Ok(&1));
//!
//! // Adding an equal key keeps both.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Erasing removes one of them.
//! tree.erase(&1);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1]);
//! ```
//!
//! Sorted insertion makes the tree a chain, so `add`, `find` and `erase` are `O(height)` which
//! can be `O(n)`.
//!
//! A `Tree` has no internal synchronization. [`Cursor`]s and [`Iter`]s borrow the tree, so any
//! `&mut self` call (which may free the node a cursor points at) ends their lifetime.

use std::cmp::Ordering;
use std::fmt;

use crate::arena::{Arena, Handle};
use crate::cursor::{Cursor, Iter};
use crate::error::TreeError;

/// An absent link plays the role of "no node": no parent, no child, or an empty tree.
pub(crate) type Link = Option<Handle>;

/// An unbalanced Binary Search Tree over keys of type `T`. Keys equal to an existing key are
/// kept as separate nodes in that node's right subtree.
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Link,
}

pub(crate) struct Node<T> {
    pub(crate) key: T,
    parent: Link,
    left: Link,
    right: Link,
}

impl<T> Node<T> {
    fn new(key: T, parent: Link) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            parent: self.parent,
            left: self.left,
            right: self.right,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles are arena indices, so copying the arena keeps every link valid.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key. Nodes are released with one flat pass over their storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The smallest key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum(), Err(TreeError::EmptyTree));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.minimum(), Ok(&1));
    /// ```
    pub fn minimum(&self) -> Result<&T, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        Ok(&self.node(self.min_node(root)).key)
    }

    /// The largest key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.maximum(), Err(TreeError::EmptyTree));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.maximum(), Ok(&3));
    /// ```
    pub fn maximum(&self) -> Result<&T, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        Ok(&self.node(self.max_node(root)).key)
    }

    /// A cursor at the smallest key, or the end cursor for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30].into_iter().collect();
    ///
    /// // The root holds 20 but iteration starts at the leftmost node.
    /// assert_eq!(tree.begin().get(), Ok(&10));
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.root.map(|root| self.min_node(root)))
    }

    /// The position past the last key. It holds no key.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Iterates over the keys in ascending order. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        let front = self.root.map(|root| self.min_node(root));
        let back = self.root.map(|root| self.max_node(root));
        Iter::new(self, front, back, self.len())
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    fn min_node(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left {
            handle = left;
        }
        handle
    }

    fn max_node(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right {
            handle = right;
        }
        handle
    }

    /// The node holding the next key in order, or `None` if `handle` holds the largest.
    pub(crate) fn successor(&self, handle: Handle) -> Link {
        if let Some(right) = self.node(handle).right {
            return Some(self.min_node(right));
        }

        // Climb while we're coming up from a right child. The first ancestor reached from its
        // left side is the answer.
        let mut child = handle;
        let mut parent = self.node(handle).parent;
        while let Some(p) = parent {
            if self.node(p).right != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// The node holding the previous key in order, or `None` if `handle` holds the smallest.
    pub(crate) fn predecessor(&self, handle: Handle) -> Link {
        if let Some(left) = self.node(handle).left {
            return Some(self.max_node(left));
        }

        let mut child = handle;
        let mut parent = self.node(handle).parent;
        while let Some(p) = parent {
            if self.node(p).left != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// Puts the subtree rooted at `new` where `old` used to hang (or at the root). `old` keeps
    /// its own links; the caller is responsible for them.
    fn transplant(&mut self, old: Handle, new: Link) {
        let parent = self.node(old).parent;
        match parent {
            None => self.root = new,
            Some(p) => {
                let p = self.nodes.get_mut(p);
                if p.left == Some(old) {
                    p.left = new;
                } else {
                    p.right = new;
                }
            }
        }

        if let Some(new) = new {
            self.nodes.get_mut(new).parent = parent;
        }
    }

    /// Detaches `handle` from the tree using Hibbard deletion. The node is left in the arena
    /// with nothing pointing at it. Returns the node that took its place when it had two
    /// children.
    ///
    /// # Diagram
    ///
    /// The two-children case where the successor `s` is deeper than the right child `r`:
    ///
    /// ```text
    ///      node                 s
    ///     /    \               / \
    ///    l      r     ->      l   r
    ///          / \               / \
    ///         s   z             x   z
    ///          \
    ///           x
    /// ```
    fn unlink(&mut self, handle: Handle) -> Link {
        let (left, right) = {
            let node = self.node(handle);
            (node.left, node.right)
        };

        match (left, right) {
            (None, right) => {
                log::trace!("unlink {handle:?}: no left child");
                self.transplant(handle, right);
                None
            }
            (Some(left), None) => {
                log::trace!("unlink {handle:?}: no right child");
                self.transplant(handle, Some(left));
                None
            }
            (Some(left), Some(right)) => {
                let successor = self.min_node(right);
                log::trace!("unlink {handle:?}: promoting successor {successor:?}");

                if successor != right {
                    let successor_right = self.node(successor).right;
                    self.transplant(successor, successor_right);
                    self.nodes.get_mut(successor).right = Some(right);
                    self.nodes.get_mut(right).parent = Some(successor);
                }

                self.transplant(handle, Some(successor));
                self.nodes.get_mut(successor).left = Some(left);
                self.nodes.get_mut(left).parent = Some(successor);
                Some(successor)
            }
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Adds `key` to the tree. An equal key already in the tree is kept; the new one goes into
    /// its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn add(&mut self, key: T) {
        let mut current = self.root;
        let mut parent = None;
        let mut goes_left = false;
        while let Some(handle) = current {
            let node = self.node(handle);
            parent = Some(handle);
            goes_left = key < node.key;
            current = if goes_left { node.left } else { node.right };
        }

        let new_node = self.nodes.alloc(Node::new(key, parent));
        log::trace!("add {new_node:?} under {parent:?}");
        match parent {
            None => self.root = Some(new_node),
            Some(p) if goes_left => self.nodes.get_mut(p).left = Some(new_node),
            Some(p) => self.nodes.get_mut(p).right = Some(new_node),
        }
    }

    /// A cursor at a node holding `key`, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// let mut cursor = tree.find(&2);
    /// assert_eq!(cursor.get(), Ok(&2));
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.get(), Ok(&3));
    ///
    /// assert_eq!(tree.find(&42), tree.end());
    /// ```
    pub fn find(&self, key: &T) -> Cursor<'_, T> {
        Cursor::new(self, self.iterative_search(self.root, key))
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.iterative_search(self.root, key).is_some()
    }

    /// Removes one node holding `key`. Returns a cursor at the node promoted into its place
    /// when the removed node had two children, and the end cursor otherwise (including when no
    /// node held `key`).
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [20, 10, 30, 25].into_iter().collect();
    ///
    /// // 20 has two children, its successor 25 takes its place.
    /// assert_eq!(tree.erase(&20).get(), Ok(&25));
    ///
    /// // 10 is a leaf.
    /// assert!(tree.erase(&10).is_end());
    ///
    /// // Nothing to erase.
    /// assert!(tree.erase(&42).is_end());
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [25, 30]);
    /// ```
    pub fn erase(&mut self, key: &T) -> Cursor<'_, T> {
        let Some(handle) = self.iterative_search(self.root, key) else {
            return self.end();
        };
        let replacement = self.unlink(handle);
        self.nodes.free(handle);
        Cursor::new(self, replacement)
    }

    /// Removes one node holding `key` and returns its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.add(String::from("a"));
    ///
    /// assert_eq!(tree.remove(&String::from("a")), Ok(String::from("a")));
    /// assert_eq!(tree.remove(&String::from("a")), Err(TreeError::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<T, TreeError> {
        let handle = self
            .iterative_search(self.root, key)
            .ok_or(TreeError::KeyNotFound)?;
        self.unlink(handle);
        Ok(self.nodes.take(handle).key)
    }

    /// Recursive descent from `link`. It recurses once per level, so callers go through
    /// [`Tree::iterative_search`]; this one is kept to check it against.
    #[cfg_attr(not(test), allow(dead_code))]
    fn search(&self, link: Link, key: &T) -> Link {
        let handle = link?;
        let node = self.node(handle);
        match key.cmp(&node.key) {
            Ordering::Less => self.search(node.left, key),
            Ordering::Equal => Some(handle),
            Ordering::Greater => self.search(node.right, key),
        }
    }

    /// Same result as [`Tree::search`] without growing the stack.
    fn iterative_search(&self, mut link: Link, key: &T) -> Link {
        while let Some(handle) = link {
            let node = self.node(handle);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(handle),
                Ordering::Greater => node.right,
            };
        }
        None
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
impl<T: Ord + fmt::Debug> Tree<T> {
    /// Walks every node and checks the ordering invariant, that each child points back at its
    /// parent, and that the arena holds no unreachable nodes.
    pub(crate) fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.len(), 0);
            return;
        };
        assert_eq!(self.node(root).parent, None);

        // (node, inclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(Handle, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        let mut seen = 0;
        while let Some((handle, low, high)) = stack.pop() {
            seen += 1;
            let node = self.node(handle);
            if let Some(low) = low {
                assert!(*low <= node.key, "{:?} is left of {:?}", node.key, low);
            }
            if let Some(high) = high {
                assert!(node.key < *high, "{:?} is right of {:?}", node.key, high);
            }
            if let Some(left) = node.left {
                assert_eq!(self.node(left).parent, Some(handle));
                stack.push((left, low, Some(&node.key)));
            }
            if let Some(right) = node.right {
                assert_eq!(self.node(right).parent, Some(handle));
                stack.push((right, Some(&node.key), high));
            }
        }
        assert_eq!(seen, self.len());
    }
}
