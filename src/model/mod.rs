//! Collection types held by the registry.
//!
//! - [AvlTree]: ordered, duplicate-free, self-balancing search tree
//! - [DynamicArray]: index-addressable resizable array
//! - [ForwardList]: singly linked list (owned node chain)
//! - [LinkedList]: doubly linked list (arena pattern, index links)
//! - [Stack] / [Queue]: LIFO / FIFO
//!
//! All of them implement the [Container] trait, the uniform operation set the
//! [Registry](crate::store::Registry) relies on for membership checks,
//! display and persistence.

/// AVL tree and in-order iteration
pub mod avl_tree;
/// Uniform container trait and access errors
pub mod container;
/// Resizable array
pub mod dynamic_array;
/// Singly linked list
pub mod forward_list;
/// Doubly linked list
pub mod linked_list;
/// FIFO queue
pub mod queue;
/// LIFO stack
pub mod stack;

pub use avl_tree::{AvlTree, InOrderIter, TreeNode};
pub use container::{Container, ContainerError};
pub use dynamic_array::DynamicArray;
pub use forward_list::ForwardList;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
