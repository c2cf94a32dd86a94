//! An unbalanced Binary Search Tree ordered by a caller-supplied comparator.
//!
//! Every payload is unique under the comparator: inserting a payload that compares `Equal` to
//! a stored one is rejected and hands the payload back. Nothing rebalances the tree, so
//! inserting sorted input produces a list-shaped tree; every walk over the tree uses an
//! explicit stack, so such trees are slow but never overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use ds_tree::bst::Bst;
//! use ds_tree::error::TreeError;
//!
//! let mut tree = Bst::natural();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1).unwrap();
//! tree.insert(3).unwrap();
//! tree.insert(2).unwrap();
//! assert_eq!(tree.search(&2), Some(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Removing a payload hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```
//!
//! # Probe keys
//!
//! Lookups take a probe of any type the comparator knows how to hold up against the stored
//! payloads, so records can be found by a key without building a whole record:
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use ds_tree::bst::{Bst, Compare};
//!
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! struct ById;
//!
//! impl Compare<User> for ById {
//!     fn compare(&self, probe: &User, stored: &User) -> Ordering {
//!         probe.id.cmp(&stored.id)
//!     }
//! }
//!
//! impl Compare<u32, User> for ById {
//!     fn compare(&self, probe: &u32, stored: &User) -> Ordering {
//!         probe.cmp(&stored.id)
//!     }
//! }
//!
//! let mut users = Bst::new(ById);
//! users.insert(User { id: 7, name: "ada" }).unwrap();
//! users.insert(User { id: 3, name: "bob" }).unwrap();
//!
//! assert_eq!(users.search(&3u32).map(|user| user.name), Some("bob"));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::collections::Stack;
use crate::error::{Rejected, TreeError};
use crate::node::{self, Link, Node};

/// Orders a probe of type `Q` against a stored payload of type `T`.
///
/// The result describes the probe relative to the stored payload: `Less` means the probe
/// belongs in the stored payload's left subtree.
///
/// Any `Fn(&Q, &T) -> Ordering` closure is a comparator, so most trees never name this trait:
///
/// ```
/// use ds_tree::bst::Bst;
///
/// let mut tree = Bst::new(|a: &i32, b: &i32| b.cmp(a));
/// for x in [1, 2, 3] {
///     tree.insert(x).unwrap();
/// }
/// assert_eq!(tree.min(), Some(&3));
/// ```
pub trait Compare<Q: ?Sized, T: ?Sized = Q> {
    /// Compares `probe` against `stored`.
    fn compare(&self, probe: &Q, stored: &T) -> Ordering;
}

impl<Q, T, F> Compare<Q, T> for F
where
    Q: ?Sized,
    T: ?Sized,
    F: Fn(&Q, &T) -> Ordering,
{
    fn compare(&self, probe: &Q, stored: &T) -> Ordering {
        self(probe, stored)
    }
}

/// The comparator behind [`Bst::natural`]: orders payloads by their [`Ord`] implementation.
///
/// Like the standard maps, a payload can be probed by anything it [`Borrow`]s, e.g. a
/// `Bst<String>` can be searched with a `&str`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<Q, T> Compare<Q, T> for Natural
where
    Q: Ord + ?Sized,
    T: Borrow<Q> + ?Sized,
{
    fn compare(&self, probe: &Q, stored: &T) -> Ordering {
        probe.cmp(stored.borrow())
    }
}

/// An unbalanced Binary Search Tree. See the [module documentation][self] for details.
pub struct Bst<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Default> Default for Bst<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for Bst<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root.as_deref(), self.len),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Bst<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Bst<T> {
    /// Generates a new, empty `Bst` ordered by `T`'s [`Ord`] implementation.
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<T, C> Bst<T, C> {
    /// Generates a new, empty `Bst` that orders its payloads with `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The number of payloads in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The smallest payload, following left children from the root.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.payload())
    }

    /// The largest payload, following right children from the root.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.payload())
    }

    /// Visits every payload in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::bst::Bst;
    ///
    /// let mut tree = Bst::natural();
    /// for x in [5, 3, 7, 1] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse_inorder(|x| visited.push(*x));
    /// assert_eq!(visited, vec![1, 3, 5, 7]);
    /// ```
    pub fn traverse_inorder<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    /// An iterator over the payloads in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        node::height(self.root.as_deref(), self.len)
    }

    /// Drops every node, and with it every payload.
    pub fn destroy(self) {
        self.destroy_with(drop);
    }

    /// Frees every node exactly once, handing each payload to `destructor` in post-order.
    pub fn destroy_with<F>(mut self, destructor: F)
    where
        F: FnMut(T),
    {
        log::trace!("destroying bst of {} nodes", self.len);
        node::destroy(self.root.take(), self.len, destructor);
    }

    /// Drops every node but keeps the tree (and its comparator) for reuse.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Frees every node exactly once, handing each payload to `destructor` in post-order, and
    /// leaves the tree empty.
    pub fn clear_with<F>(&mut self, destructor: F)
    where
        F: FnMut(T),
    {
        let len = std::mem::take(&mut self.len);
        node::clear(self.root.take(), len, destructor);
    }
}

impl<T, C> Bst<T, C>
where
    C: Compare<T>,
{
    /// Inserts `value` as a new leaf. If a payload comparing `Equal` is already stored, the
    /// tree is left untouched and `value` is handed back with [`TreeError::AlreadyExists`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::bst::Bst;
    /// use ds_tree::error::TreeError;
    ///
    /// let mut tree = Bst::natural();
    /// assert!(tree.insert(1).is_ok());
    ///
    /// let rejected = tree.insert(1).unwrap_err();
    /// assert_eq!(rejected.error, TreeError::AlreadyExists);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), Rejected<T>> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.cmp.compare(&value, node.payload()) {
                Ordering::Less => &mut node.links.left,
                Ordering::Greater => &mut node.links.right,
                Ordering::Equal => {
                    log::debug!("rejecting duplicate payload");
                    return Err(Rejected::new(TreeError::AlreadyExists, value));
                }
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        Ok(())
    }
}

impl<T, C> Bst<T, C> {
    /// Finds the stored payload comparing `Equal` to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::bst::Bst;
    ///
    /// let mut tree = Bst::natural();
    /// tree.insert(String::from("b")).unwrap();
    ///
    /// assert_eq!(tree.search("b").map(String::as_str), Some("b"));
    /// assert_eq!(tree.search("a"), None);
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match self.cmp.compare(key, node.payload()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.payload()),
            };
        }
        None
    }

    /// Whether a payload comparing `Equal` to `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.search(key).is_some()
    }

    /// Removes the payload comparing `Equal` to `key` and hands it back.
    ///
    /// A node with two children is replaced by its in-order predecessor (the largest payload
    /// in its left subtree). Removing from an empty tree, or a key with no match, fails with
    /// [`TreeError::NotFound`] and leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::bst::Bst;
    /// use ds_tree::error::TreeError;
    ///
    /// let mut tree = Bst::natural();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.remove(&42), Err(TreeError::NotFound));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<T, TreeError>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        if self.root.is_none() {
            return Err(TreeError::NotFound);
        }

        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => self.cmp.compare(key, node.payload()),
                None => return Err(TreeError::NotFound),
            };
            if ordering == Ordering::Equal {
                break;
            }
            link = match link {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.links.left
                    } else {
                        &mut node.links.right
                    }
                }
                None => return Err(TreeError::NotFound),
            };
        }

        let Some(removed) = link.take() else {
            return Err(TreeError::NotFound);
        };
        let (payload, left, right) = (*removed).into_parts();
        *link = match (left, right) {
            (None, None) => {
                log::trace!("removing a leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                log::trace!("removing a node with one child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                log::trace!("removing a node with two children");
                let spliced = splice_predecessor(left, right);

                // The removed key sits strictly between the predecessor and its new right child.
                if cfg!(debug_assertions) {
                    assert_eq!(
                        self.cmp.compare(key, spliced.payload()),
                        Ordering::Greater
                    );
                    if let Some(right) = spliced.right() {
                        assert_eq!(self.cmp.compare(key, right.payload()), Ordering::Less);
                    }
                }
                Some(spliced)
            }
        };
        self.len -= 1;

        Ok(payload)
    }

    /// Removes the payload comparing `Equal` to `key` and hands it to `destructor`.
    pub fn remove_with<Q, F>(&mut self, key: &Q, destructor: F) -> Result<(), TreeError>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
        F: FnOnce(T),
    {
        self.remove(key).map(destructor)
    }
}

/// Builds the replacement for a removed node with children `left` and `right`: the largest
/// node of `left` is lifted out (its own left subtree takes its old slot) and adopts both.
fn splice_predecessor<T>(mut left: Box<Node<T>>, right: Box<Node<T>>) -> Box<Node<T>> {
    if left.links.right.is_none() {
        // `left` is the predecessor and keeps its own left subtree.
        left.links.right = Some(right);
        return left;
    }

    let mut link = &mut left.links.right;
    loop {
        let has_right = link.as_deref().map_or(false, |node| node.right().is_some());
        if !has_right {
            break;
        }
        link = match link {
            Some(node) => &mut node.links.right,
            None => break,
        };
    }

    let Some(mut predecessor) = link.take() else {
        return left;
    };
    *link = predecessor.links.left.take();
    predecessor.links.left = Some(left);
    predecessor.links.right = Some(right);
    predecessor
}

impl<'a, T, C> IntoIterator for &'a Bst<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the payloads of a [`Bst`], created by [`Bst::iter`].
///
/// The stack holds the chain of nodes whose left subtrees are being walked, so it never grows
/// past the tree's height.
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(curr) = node {
            self.stack.push(curr);
            node = curr.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.payload())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
