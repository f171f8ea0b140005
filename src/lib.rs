//! This crate contains two classic introductory data structures, a Binary
//! Search Tree and a doubly linked list, written as small self-contained
//! library types.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! values, test membership, and visit the stored values in various orders.
//! BSTs are typically defined recursively using the notion of a `Node`. A
//! `Node` stores the inserted value and will sometimes have child `Node`s.
//! The most important invariants of the [`tree::Tree`] in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value (equal values go right, so the
//!    tree can hold duplicates).
//!
//! > Note that this tree is never rebalanced. Its shape is a direct
//! > function of insertion order, and searching takes `O(height)`, which is
//! > `O(N)` in the worst case. Sorted iteration falls out of the invariants
//! > by visiting the left subtree, then the subtree root, then the right
//! > subtree.
//!
//! ## Doubly linked list
//!
//! The [`list::LinkedList`] keeps its nodes in a generational slot arena
//! and links them with indices, so `prev` back-references cannot form
//! ownership cycles. Pushing returns a [`list::NodeId`] handle that can
//! later be used to remove or relocate that node in `O(1)`. Handles are
//! checked: once the node is gone, or if the handle came from a different
//! list, operations fail with an explicit error instead of corrupting
//! links.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod list;
pub mod tree;

#[cfg(test)]
mod test;
