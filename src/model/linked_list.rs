//! Doubly linked list of string values.
//!
//! Nodes live in an arena (`Vec<Option<LNode>>`) and link to each other by
//! [NodeIndex] instead of references. Freed slots are recycled through a
//! free list, so node indices stay stable while other nodes come and go.

use crate::model::container::{Container, ContainerError};

const NAME: &str = "Doubly linked list";

/// Index of a node in the list arena.
type NodeIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LNode {
    data: String,
    prev: Option<NodeIndex>,
    next: Option<NodeIndex>,
}

// =#========================================================================#=
// LINKED LIST
// =#========================================================================#=
/// A doubly linked list using the arena pattern.
///
/// # Invariants
/// - `head.prev` and `tail.next` are `None`
/// - following `next` from `head` visits exactly `len` nodes and ends at `tail`
/// - every `None` slot in `nodes` is listed exactly once in `free`
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: Vec<Option<LNode>>,
    free: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    len: usize,
}

// ============================================================================
// Arena Helpers (private)
// ============================================================================
impl LinkedList {
    fn node(&self, index: NodeIndex) -> Option<&LNode> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: NodeIndex) -> Option<&mut LNode> {
        self.nodes.get_mut(index).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: LNode) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Points the `next` link of `at` (or the head, for `None`) to `to`.
    fn set_next(&mut self, at: Option<NodeIndex>, to: Option<NodeIndex>) {
        match at {
            Some(index) => {
                if let Some(node) = self.node_mut(index) {
                    node.next = to;
                }
            }
            None => self.head = to,
        }
    }

    /// Points the `prev` link of `at` (or the tail, for `None`) to `to`.
    fn set_prev(&mut self, at: Option<NodeIndex>, to: Option<NodeIndex>) {
        match at {
            Some(index) => {
                if let Some(node) = self.node_mut(index) {
                    node.prev = to;
                }
            }
            None => self.tail = to,
        }
    }

    /// Links a new node between `prev` and `next` (either may be the list end).
    fn link_between(&mut self, prev: Option<NodeIndex>, next: Option<NodeIndex>, value: String) {
        let index = self.alloc(LNode { data: value, prev, next });
        self.set_next(prev, Some(index));
        self.set_prev(next, Some(index));
        self.len += 1;
    }

    /// Unlinks the node at `index` and returns its value.
    fn unlink(&mut self, index: NodeIndex) -> Option<String> {
        let node = self.nodes.get_mut(index)?.take()?;
        self.set_next(node.prev, node.next);
        self.set_prev(node.next, node.prev);
        self.free.push(index);
        self.len -= 1;
        Some(node.data)
    }

    /// Returns the arena index of the first node holding `value`.
    fn find(&self, value: &str) -> Option<NodeIndex> {
        self.indices().find(|&index| self.node(index).is_some_and(|node| node.data == value))
    }

    fn indices(&self) -> Indices<'_> {
        Indices {
            list: self,
            next: self.head,
        }
    }
}

// ============================================================================
// API (pub)
// ============================================================================
impl LinkedList {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a value.
    pub fn push_head(&mut self, value: String) {
        self.link_between(None, self.head, value);
    }

    /// Appends a value.
    pub fn push_tail(&mut self, value: String) {
        self.link_between(self.tail, None, value);
    }

    /// Inserts `value` in front of the first element equal to `target`.
    ///
    /// # Returns
    /// `false` if `target` is not in the list (list unchanged).
    pub fn insert_before(&mut self, target: &str, value: String) -> bool {
        let Some(index) = self.find(target) else {
            return false;
        };
        let prev = self.node(index).and_then(|node| node.prev);
        self.link_between(prev, Some(index), value);
        true
    }

    /// Inserts `value` behind the first element equal to `target`.
    ///
    /// # Returns
    /// `false` if `target` is not in the list (list unchanged).
    pub fn insert_after(&mut self, target: &str, value: String) -> bool {
        let Some(index) = self.find(target) else {
            return false;
        };
        let next = self.node(index).and_then(|node| node.next);
        self.link_between(Some(index), next, value);
        true
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn delete_head(&mut self) -> Result<String, ContainerError> {
        self.head
            .and_then(|index| self.unlink(index))
            .ok_or(ContainerError::Empty(NAME))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn delete_tail(&mut self) -> Result<String, ContainerError> {
        self.tail
            .and_then(|index| self.unlink(index))
            .ok_or(ContainerError::Empty(NAME))
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if no element matched.
    pub fn delete_value(&mut self, value: &str) -> bool {
        self.find(value)
            .and_then(|index| self.unlink(index))
            .is_some()
    }

    /// Removes the element directly in front of the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if `value` is missing or is the head.
    pub fn delete_before(&mut self, value: &str) -> bool {
        self.find(value)
            .and_then(|index| self.node(index)?.prev)
            .and_then(|prev| self.unlink(prev))
            .is_some()
    }

    /// Removes the element directly behind the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if `value` is missing or is the tail.
    pub fn delete_after(&mut self, value: &str) -> bool {
        self.find(value)
            .and_then(|index| self.node(index)?.next)
            .and_then(|next| self.unlink(next))
            .is_some()
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn head(&self) -> Result<&str, ContainerError> {
        self.head
            .and_then(|index| self.node(index))
            .map(|node| node.data.as_str())
            .ok_or(ContainerError::Empty(NAME))
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn tail(&self) -> Result<&str, ContainerError> {
        self.tail
            .and_then(|index| self.node(index))
            .map(|node| node.data.as_str())
            .ok_or(ContainerError::Empty(NAME))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [ContainerError::OutOfRange] if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<&str, ContainerError> {
        self.iter()
            .nth(index)
            .ok_or_else(|| ContainerError::out_of_range(index, self.len))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over the elements, head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.indices()
            .filter_map(|index| self.node(index))
            .map(|node| node.data.as_str())
    }

    /// Returns an iterator over the elements, tail to head.
    pub fn iter_rev(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(self.tail.and_then(|index| self.node(index)), |node| {
            node.prev.and_then(|index| self.node(index))
        })
        .map(|node| node.data.as_str())
    }
}

impl Container for LinkedList {
    fn len(&self) -> usize {
        self.len
    }

    fn is_member(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }

    fn restore(&mut self, value: String) {
        self.push_tail(value);
    }

    fn clear(&mut self) {
        *self = LinkedList::default();
    }
}

impl PartialEq for LinkedList {
    /// Lists are equal if they hold the same values in the same order,
    /// regardless of arena layout.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

/// Arena indices of a [LinkedList], head to tail.
struct Indices<'a> {
    list: &'a LinkedList,
    next: Option<NodeIndex>,
}

impl Iterator for Indices<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = self.list.node(index).and_then(|node| node.next);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = LinkedList::new();
        list.push_tail("a".to_string());
        list.push_tail("b".to_string());
        list.delete_head().unwrap();
        list.push_head("c".to_string());

        assert_eq!(list.nodes.len(), 2);
        assert!(list.free.is_empty());
        assert_eq!(list.iter().collect::<Vec<_>>(), ["c", "b"]);
        assert_eq!(list.iter_rev().collect::<Vec<_>>(), ["b", "c"]);
    }
}
