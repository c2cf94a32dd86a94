//! The LIFO and FIFO sequences the trees use to walk themselves without recursion.
//!
//! Both grow on demand; a capacity passed at construction is only a hint. `push` behaves like
//! `Vec::push` (aborting if the allocator gives up) while `try_push` reports
//! [`TreeError::AllocationFailure`] and leaves the sequence untouched.

use std::collections::VecDeque;

use crate::error::{Rejected, TreeError};

/// A growable last-in, first-out stack.
///
/// # Examples
///
/// ```
/// use ds_tree::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for at least `capacity_hint` items.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity_hint),
        }
    }

    /// Pushes an item on top of the stack, growing it if needed.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes an item on top of the stack, handing it back if the stack can't grow.
    pub fn try_push(&mut self, item: T) -> Result<(), Rejected<T>> {
        if self.items.try_reserve(1).is_err() {
            return Err(Rejected::new(TreeError::AllocationFailure, item));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The top item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable access to the top item, if any.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of items the stack can hold without growing.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every item, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes every item, top first, handing each to `destructor`.
    pub fn clear_with<F>(&mut self, mut destructor: F)
    where
        F: FnMut(T),
    {
        while let Some(item) = self.items.pop() {
            destructor(item);
        }
    }
}

/// A growable first-in, first-out queue backed by a ring buffer.
///
/// # Examples
///
/// ```
/// use ds_tree::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for at least `capacity_hint` items.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity_hint),
        }
    }

    /// Appends an item at the back of the queue, growing it if needed.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Appends an item at the back of the queue, handing it back if the queue can't grow.
    pub fn try_push(&mut self, item: T) -> Result<(), Rejected<T>> {
        if self.items.try_reserve(1).is_err() {
            return Err(Rejected::new(TreeError::AllocationFailure, item));
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Removes and returns the front item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The front item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of items the queue can hold without growing.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every item, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes every item, front first, handing each to `destructor`.
    pub fn clear_with<F>(&mut self, mut destructor: F)
    where
        F: FnMut(T),
    {
        while let Some(item) = self.items.pop_front() {
            destructor(item);
        }
    }
}
