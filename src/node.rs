//! The node shared by [`BinaryTree`][crate::binary_tree::BinaryTree] and
//! [`Bst`][crate::bst::Bst].
//!
//! A `Node` owns one payload and at most two children. There are no parent pointers: every
//! structural operation works top-down, and every parent-to-child link is an exclusive
//! ownership edge.

use crate::collections::Stack;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child slot of a node to follow or modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// A tree node holding a payload and up to two children.
///
/// A standalone node is created with [`Node::new`] and then handed to a tree, which takes
/// ownership of it. Detaching a child from a tree hands the node (and everything below it) back.
///
/// # Examples
///
/// ```
/// use ds_tree::node::Node;
///
/// let node = Node::new("payload");
/// assert!(node.is_leaf());
/// assert_eq!(node.payload(), &"payload");
/// assert_eq!(node.into_payload(), "payload");
/// ```
#[derive(Debug)]
pub struct Node<T> {
    payload: T,
    pub(crate) links: Links<T>,
}

/// The two child slots of a node.
///
/// Lives in its own struct so that dropping it can tear the subtree down with an explicit stack
/// while `Node` itself can still be taken apart by value.
#[derive(Debug)]
pub(crate) struct Links<T> {
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Drop for Links<T> {
    fn drop(&mut self) {
        let mut stack = Stack::new();
        stack.push_link(self.left.take());
        stack.push_link(self.right.take());

        // Every popped node has its children moved onto the stack first, so the node itself
        // drops with empty links and nothing below recurses.
        while let Some(mut node) = stack.pop() {
            stack.push_link(node.links.left.take());
            stack.push_link(node.links.right.take());
        }
    }
}

impl<T> Stack<Box<Node<T>>> {
    fn push_link(&mut self, link: Link<T>) {
        if let Some(node) = link {
            self.push(node);
        }
    }
}

impl<T> Links<T> {
    fn empty() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    pub(crate) fn get(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn get_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Node<T> {
    /// Creates a standalone leaf holding `payload`. It isn't owned by any tree yet.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            links: Links::empty(),
        }
    }

    pub(crate) fn new_boxed(payload: T) -> Box<Self> {
        Box::new(Self::new(payload))
    }

    /// The payload stored in this node.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Mutable access to the payload. Changing the payload never changes the tree's shape.
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Consumes the node and returns its payload. Any children are dropped.
    pub fn into_payload(self) -> T {
        let Self { payload, links } = self;
        drop(links);
        payload
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.links.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.links.right.as_deref()
    }

    /// The child on the given side, if any.
    pub fn child(&self, side: Side) -> Option<&Node<T>> {
        self.links.get(side).as_deref()
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.links.left.is_none() && self.links.right.is_none()
    }

    /// Splits the node into its payload and its two (possibly empty) children.
    pub(crate) fn into_parts(mut self) -> (T, Link<T>, Link<T>) {
        let left = self.links.left.take();
        let right = self.links.right.take();
        let Self { payload, .. } = self;
        (payload, left, right)
    }

    /// Follows `path` from this node and returns the node it ends at.
    pub(crate) fn descend(&self, path: &[Side]) -> Option<&Node<T>> {
        let mut node = self;
        for &side in path {
            node = node.links.get(side).as_deref()?;
        }
        Some(node)
    }

    /// Mutable version of [`Node::descend`].
    pub(crate) fn descend_mut(&mut self, path: &[Side]) -> Option<&mut Node<T>> {
        let mut node = self;
        for &side in path {
            node = node.links.get_mut(side).as_deref_mut()?;
        }
        Some(node)
    }
}

/// The number of nodes on the longest path down from `root`, walking top-down with an explicit
/// stack of `(node, depth)` pairs.
pub(crate) fn height<T>(root: Option<&Node<T>>, capacity_hint: usize) -> usize {
    let mut stack = Stack::with_capacity(capacity_hint);
    if let Some(root) = root {
        stack.push((root, 1));
    }

    let mut height = 0;
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        for child in [node.left(), node.right()].into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
    height
}

/// Frees every node below (and including) `root`, handing each payload to `destructor` in
/// post-order.
///
/// Uses two stacks: the walk goes node, right, left (always descending right and parking left
/// children on `pending`) and moves every node onto `visited`. Popping `visited` then yields
/// left, right, node.
pub(crate) fn destroy<T, F>(root: Link<T>, capacity_hint: usize, mut destructor: F)
where
    F: FnMut(T),
{
    let Some(mut curr) = root else {
        return;
    };

    let mut pending = Stack::with_capacity(capacity_hint);
    let mut visited = Stack::with_capacity(capacity_hint);
    loop {
        let left = curr.links.left.take();
        let right = curr.links.right.take();
        visited.push(curr);

        pending.push_link(left);
        curr = match right.or_else(|| pending.pop()) {
            Some(next) => next,
            None => break,
        };
    }

    while let Some(node) = visited.pop() {
        destructor((*node).into_payload());
    }
}

/// Frees every node below (and including) `root`, handing each payload to `destructor` in
/// post-order, with a single stack.
///
/// `path` holds the chain of nodes from the root to the current one. Descending into a child
/// moves it out of its parent, so an empty right slot on the top of `path` means that subtree
/// is either absent or already freed and the top node is next.
pub(crate) fn clear<T, F>(root: Link<T>, capacity_hint: usize, mut destructor: F)
where
    F: FnMut(T),
{
    let mut path: Stack<Box<Node<T>>> = Stack::with_capacity(capacity_hint);
    let mut curr = root;

    loop {
        while let Some(mut node) = curr {
            curr = node.links.left.take();
            path.push(node);
        }

        let Some(top) = path.peek_mut() else {
            break;
        };
        match top.links.right.take() {
            Some(right) => curr = Some(right),
            None => {
                if let Some(node) = path.pop() {
                    destructor((*node).into_payload());
                }
            }
        }
    }
}

/// Copies the subtree below `root`, keeping its exact shape.
///
/// Source nodes are collected in post-order and rebuilt bottom-up: by the time a node is
/// copied, the copies of its children sit on top of `built`, right above left.
pub(crate) fn clone_subtree<T: Clone>(root: Option<&Node<T>>, capacity_hint: usize) -> Link<T> {
    let mut pending = Stack::with_capacity(capacity_hint);
    let mut visited = Stack::with_capacity(capacity_hint);
    if let Some(root) = root {
        pending.push(root);
    }
    while let Some(node) = pending.pop() {
        visited.push(node);
        if let Some(left) = node.left() {
            pending.push(left);
        }
        if let Some(right) = node.right() {
            pending.push(right);
        }
    }

    let mut built: Stack<Box<Node<T>>> = Stack::with_capacity(capacity_hint);
    while let Some(node) = visited.pop() {
        let mut copy = Node::new_boxed(node.payload.clone());
        if node.right().is_some() {
            copy.links.right = built.pop();
        }
        if node.left().is_some() {
            copy.links.left = built.pop();
        }
        built.push(copy);
    }
    built.pop()
}
