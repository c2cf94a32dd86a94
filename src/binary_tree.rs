//! A generic binary tree whose shape is entirely up to the caller.
//!
//! Nodes are placed explicitly: a root with [`BinaryTree::set_root`], single nodes with
//! [`BinaryTree::attach_left`]/[`BinaryTree::attach_right`], and whole trees with
//! [`BinaryTree::attach_tree_left`]/[`BinaryTree::attach_tree_right`]. A node already in the
//! tree is named by the [`Side`] steps leading to it from the root, so `&[]` is the root and
//! `&[Side::Left, Side::Right]` is the right child of the root's left child.
//!
//! # Node count
//!
//! [`BinaryTree::len`] is only exact while the structural operations are used as intended:
//! the single node operations always adjust the count by one, whatever hangs below the node.
//! Attaching a node that has children (e.g. one returned by [`BinaryTree::detach_left`])
//! therefore under-counts. Use the `attach_tree_*` operations to move whole subtrees.
//!
//! # Examples
//!
//! ```
//! use ds_tree::binary_tree::BinaryTree;
//! use ds_tree::node::{Node, Side};
//!
//! //       1
//! //      / \
//! //     2   3
//! let mut tree = BinaryTree::new();
//! tree.set_root(Node::new(1)).unwrap();
//! tree.attach_left(&[], Node::new(2)).unwrap();
//! tree.attach_right(&[], Node::new(3)).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.get(&[Side::Left]), Some(&2));
//!
//! let mut visited = Vec::new();
//! tree.postorder(|x| visited.push(*x));
//! assert_eq!(visited, vec![2, 3, 1]);
//! ```

use crate::collections::{Queue, Stack};
use crate::error::{Rejected, TreeError};
use crate::node::{self, Link, Node, Side};

/// A binary tree of arbitrary shape. See the [module documentation][self] for details.
#[derive(Debug)]
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_subtree(self.root(), self.len),
            len: self.len,
        }
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree. See the [module documentation][self] for when this
    /// can drift from the real number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The node at the end of `path`, if there is one.
    pub fn node(&self, path: &[Side]) -> Option<&Node<T>> {
        self.root.as_deref()?.descend(path)
    }

    /// The payload of the node at the end of `path`, if there is one.
    pub fn get(&self, path: &[Side]) -> Option<&T> {
        self.node(path).map(Node::payload)
    }

    /// Mutable access to the payload of the node at the end of `path`.
    pub fn get_mut(&mut self, path: &[Side]) -> Option<&mut T> {
        self.root
            .as_deref_mut()?
            .descend_mut(path)
            .map(Node::payload_mut)
    }

    /// Makes `node` the root of an empty tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::AlreadyExists`] if the tree already has a root. The node is handed back.
    pub fn set_root(&mut self, node: Node<T>) -> Result<(), Rejected<Node<T>>> {
        if self.root.is_some() {
            log::debug!("set_root rejected: tree already has a root");
            return Err(Rejected::new(TreeError::AlreadyExists, node));
        }

        self.root = Some(Box::new(node));
        self.len += 1;
        Ok(())
    }

    /// Attaches `node` as the left child of the node at `parent`, counting it as one node.
    ///
    /// `node` is expected to be a leaf. Its descendants, if any, come along but aren't counted.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidArgument`] if no node exists at `parent`.
    /// - [`TreeError::AlreadyExists`] if the parent already has a left child.
    ///
    /// The node is handed back in both cases.
    pub fn attach_left(
        &mut self,
        parent: &[Side],
        node: Node<T>,
    ) -> Result<(), Rejected<Node<T>>> {
        self.attach(parent, Side::Left, node)
    }

    /// Attaches `node` as the right child of the node at `parent`. See
    /// [`BinaryTree::attach_left`].
    pub fn attach_right(
        &mut self,
        parent: &[Side],
        node: Node<T>,
    ) -> Result<(), Rejected<Node<T>>> {
        self.attach(parent, Side::Right, node)
    }

    fn attach(
        &mut self,
        parent: &[Side],
        side: Side,
        node: Node<T>,
    ) -> Result<(), Rejected<Node<T>>> {
        let Some(parent_node) = self
            .root
            .as_deref_mut()
            .and_then(|root| root.descend_mut(parent))
        else {
            log::debug!("attach {:?} rejected: no node at {:?}", side, parent);
            return Err(Rejected::new(TreeError::InvalidArgument, node));
        };

        let slot = parent_node.links.get_mut(side);
        if slot.is_some() {
            log::debug!("attach {:?} rejected: slot under {:?} is occupied", side, parent);
            return Err(Rejected::new(TreeError::AlreadyExists, node));
        }

        *slot = Some(Box::new(node));
        self.len += 1;
        Ok(())
    }

    /// Grafts every node of `subtree` as the left subtree of the node at `parent`.
    ///
    /// On success the nodes belong to `self`, `self.len()` grows by `subtree.len()` and
    /// `subtree` is left empty. Grafting an empty tree does nothing.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidArgument`] if no node exists at `parent`.
    /// - [`TreeError::AlreadyExists`] if the parent already has a left child.
    ///
    /// Neither tree is modified on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::binary_tree::BinaryTree;
    /// use ds_tree::node::{Node, Side};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.set_root(Node::new("root")).unwrap();
    ///
    /// let mut branch = BinaryTree::new();
    /// branch.set_root(Node::new("branch")).unwrap();
    /// branch.attach_right(&[], Node::new("leaf")).unwrap();
    ///
    /// tree.attach_tree_left(&[], &mut branch).unwrap();
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.get(&[Side::Left, Side::Right]), Some(&"leaf"));
    /// assert!(branch.is_empty());
    /// assert_eq!(branch.len(), 0);
    /// ```
    pub fn attach_tree_left(
        &mut self,
        parent: &[Side],
        subtree: &mut BinaryTree<T>,
    ) -> Result<(), TreeError> {
        self.graft(parent, Side::Left, subtree)
    }

    /// Grafts every node of `subtree` as the right subtree of the node at `parent`. See
    /// [`BinaryTree::attach_tree_left`].
    pub fn attach_tree_right(
        &mut self,
        parent: &[Side],
        subtree: &mut BinaryTree<T>,
    ) -> Result<(), TreeError> {
        self.graft(parent, Side::Right, subtree)
    }

    fn graft(
        &mut self,
        parent: &[Side],
        side: Side,
        subtree: &mut BinaryTree<T>,
    ) -> Result<(), TreeError> {
        let parent_node = self
            .root
            .as_deref_mut()
            .and_then(|root| root.descend_mut(parent))
            .ok_or(TreeError::InvalidArgument)?;

        if subtree.root.is_none() {
            return Ok(());
        }

        let slot = parent_node.links.get_mut(side);
        if slot.is_some() {
            log::debug!("graft {:?} rejected: slot under {:?} is occupied", side, parent);
            return Err(TreeError::AlreadyExists);
        }

        *slot = subtree.root.take();
        log::trace!("grafted {} nodes {:?} of {:?}", subtree.len, side, parent);
        self.len += subtree.len;
        subtree.len = 0;
        Ok(())
    }

    /// Unlinks the left child of the node at `parent` and hands it back, along with everything
    /// below it. Nothing is dropped.
    ///
    /// The count drops by one when a child was detached, whatever its size. Returns `Ok(None)`
    /// if the parent has no left child, and then the count is left alone: only an actual
    /// detachment decrements it, so detaching from an empty slot can't drive it below zero.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if no node exists at `parent`.
    pub fn detach_left(&mut self, parent: &[Side]) -> Result<Option<Node<T>>, TreeError> {
        self.detach(parent, Side::Left)
    }

    /// Unlinks the right child of the node at `parent`. See [`BinaryTree::detach_left`].
    pub fn detach_right(&mut self, parent: &[Side]) -> Result<Option<Node<T>>, TreeError> {
        self.detach(parent, Side::Right)
    }

    fn detach(&mut self, parent: &[Side], side: Side) -> Result<Option<Node<T>>, TreeError> {
        let parent_node = self
            .root
            .as_deref_mut()
            .and_then(|root| root.descend_mut(parent))
            .ok_or(TreeError::InvalidArgument)?;

        let detached = parent_node.links.get_mut(side).take().map(|node| *node);
        if detached.is_some() {
            self.len = self.len.saturating_sub(1);
        }
        Ok(detached)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        node::height(self.root(), self.len)
    }

    /// Drops every node, and with it every payload.
    pub fn destroy(self) {
        self.destroy_with(drop);
    }

    /// Frees every node exactly once, handing each payload to `destructor` first.
    ///
    /// Payloads are handed over in post-order (left, right, node). The walk uses explicit
    /// stacks, so arbitrarily deep trees are fine.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_tree::binary_tree::BinaryTree;
    /// use ds_tree::node::Node;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.set_root(Node::new(1)).unwrap();
    /// tree.attach_left(&[], Node::new(2)).unwrap();
    ///
    /// let mut freed = Vec::new();
    /// tree.destroy_with(|x| freed.push(x));
    /// assert_eq!(freed, vec![2, 1]);
    /// ```
    pub fn destroy_with<F>(mut self, destructor: F)
    where
        F: FnMut(T),
    {
        log::trace!("destroying tree of {} nodes", self.len);
        node::destroy(self.root.take(), self.len, destructor);
    }

    /// Drops every node but keeps the (now empty) tree.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Frees every node exactly once, handing each payload to `destructor` first, and leaves
    /// the tree empty.
    ///
    /// Payloads are handed over in post-order (left, right, node).
    pub fn clear_with<F>(&mut self, destructor: F)
    where
        F: FnMut(T),
    {
        let len = std::mem::take(&mut self.len);
        node::clear(self.root.take(), len, destructor);
    }

    /// Visits every payload in pre-order (node, left, right), recursively.
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        fn walk<T, F: FnMut(&T)>(node: &Node<T>, visit: &mut F) {
            visit(node.payload());
            if let Some(left) = node.left() {
                walk(left, visit);
            }
            if let Some(right) = node.right() {
                walk(right, visit);
            }
        }

        if let Some(root) = self.root() {
            walk(root, &mut visit);
        }
    }

    /// Visits every payload in pre-order (node, left, right) using an explicit stack.
    pub fn preorder_iterative<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let Some(mut curr) = self.root() else {
            return;
        };

        // Right children wait on the stack while we keep going left.
        let mut stack = Stack::with_capacity(self.len);
        loop {
            visit(curr.payload());
            if let Some(right) = curr.right() {
                stack.push(right);
            }
            curr = match curr.left().or_else(|| stack.pop()) {
                Some(next) => next,
                None => break,
            };
        }
    }

    /// Visits every payload in in-order (left, node, right), recursively.
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        fn walk<T, F: FnMut(&T)>(node: &Node<T>, visit: &mut F) {
            if let Some(left) = node.left() {
                walk(left, visit);
            }
            visit(node.payload());
            if let Some(right) = node.right() {
                walk(right, visit);
            }
        }

        if let Some(root) = self.root() {
            walk(root, &mut visit);
        }
    }

    /// Visits every payload in in-order (left, node, right) using an explicit stack.
    pub fn inorder_iterative<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack = Stack::with_capacity(self.len);
        let mut curr = self.root();
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left();
            }

            let Some(node) = stack.pop() else {
                break;
            };
            visit(node.payload());
            curr = node.right();
        }
    }

    /// Visits every payload in post-order (left, right, node), recursively.
    pub fn postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        fn walk<T, F: FnMut(&T)>(node: &Node<T>, visit: &mut F) {
            if let Some(left) = node.left() {
                walk(left, visit);
            }
            if let Some(right) = node.right() {
                walk(right, visit);
            }
            visit(node.payload());
        }

        if let Some(root) = self.root() {
            walk(root, &mut visit);
        }
    }

    /// Visits every payload in post-order (left, right, node) using an explicit stack.
    ///
    /// A node is on the stack for three steps, so each entry remembers which of its subtrees
    /// are done.
    pub fn postorder_iterative<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let Some(root) = self.root() else {
            return;
        };

        let mut stack = Stack::with_capacity(self.len);
        stack.push(Frame::enter(root));
        while let Some(frame) = stack.peek_mut() {
            let node = frame.node;
            match frame.phase {
                Phase::Enter => {
                    frame.phase = Phase::LeftDone;
                    if let Some(left) = node.left() {
                        stack.push(Frame::enter(left));
                    }
                }
                Phase::LeftDone => {
                    frame.phase = Phase::Done;
                    if let Some(right) = node.right() {
                        stack.push(Frame::enter(right));
                    }
                }
                Phase::Done => {
                    visit(node.payload());
                    stack.pop();
                }
            }
        }
    }

    /// Visits every payload level by level, left to right (breadth first).
    pub fn levelorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let Some(root) = self.root() else {
            return;
        };

        let mut queue = Queue::with_capacity(self.len);
        queue.push(root);
        while let Some(node) = queue.pop() {
            visit(node.payload());
            for child in [node.left(), node.right()].into_iter().flatten() {
                queue.push(child);
            }
        }
    }
}

/// Where a node is in its own post-order visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Neither subtree has been walked.
    Enter,
    /// The left subtree is done; the right one is next.
    LeftDone,
    /// Both subtrees are done; the node itself can be visited.
    Done,
}

struct Frame<'a, T> {
    node: &'a Node<T>,
    phase: Phase,
}

impl<'a, T> Frame<'a, T> {
    fn enter(node: &'a Node<T>) -> Self {
        Self {
            node,
            phase: Phase::Enter,
        }
    }
}
