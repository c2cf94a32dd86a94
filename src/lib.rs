//! This crate exposes a generic binary tree and an unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built out of `Node`s. Every `Node` stores a value (its "payload") and
//! has at most two children, a left one and a right one. A [`BinaryTree`][binary_tree::BinaryTree]
//! puts no constraint on where values go: the caller decides the shape by attaching nodes
//! (or whole trees) under existing ones. It can be walked in pre-order (node, left, right),
//! in-order (left, node, right), post-order (left, right, node) and level-order
//! (breadth first).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a binary tree that places values itself, using a comparator. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). A [`Bst`][bst::Bst] doesn't rebalance itself,
//! so its height depends entirely on insertion order: sorted input gives a tree of height
//! `N`. BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## Walking without recursion
//!
//! Everything that has to touch a whole tree (dropping, clearing, cloning, measuring the
//! height, the `*_iterative` traversals) keeps its own [`Stack`][collections::Stack] or
//! [`Queue`][collections::Queue] instead of recursing, so arbitrarily deep trees are fine.
//! Only [`BinaryTree::preorder`][binary_tree::BinaryTree::preorder] and its in-order and
//! post-order siblings recurse.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod bst;
pub mod collections;
pub mod error;
pub mod node;

#[cfg(test)]
mod test;
