//! Singly linked list of string values.
//!
//! Nodes form an owned chain (`Option<Box<FNode>>`) from the head. Positional
//! edits walk a cursor to the link in front of the target position and
//! splice there; value-targeted edits first look up the position.

use crate::model::container::{Container, ContainerError};
use std::fmt;

const NAME: &str = "Singly linked list";

type Link = Option<Box<FNode>>;

struct FNode {
    data: String,
    next: Link,
}

// =#========================================================================#=
// FORWARD LIST
// =#========================================================================#=
/// A singly linked list.
///
/// Head operations are `O(1)`, everything else walks the chain: a single
/// [push_tail](ForwardList::push_tail) or [tail](ForwardList::tail) is
/// `O(n)`. Bulk appends through [restore_all](Container::restore_all) walk
/// the chain once, so replaying a stored list is linear.
/// Cloning, comparing and dropping all work iteratively.
#[derive(Default)]
pub struct ForwardList {
    head: Link,
    len: usize,
}

// ============================================================================
// Cursor Helpers (private)
// ============================================================================
impl ForwardList {
    /// Returns the link at position `index` (the head link for 0),
    /// stopping early at the end of the chain.
    fn link_at(&mut self, index: usize) -> &mut Link {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// Splices a new node in at position `index`.
    fn insert_node(&mut self, index: usize, value: String) {
        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(FNode { data: value, next }));
        self.len += 1;
    }

    /// Unlinks the node at position `index`, returning its value.
    fn remove_node(&mut self, index: usize) -> Option<String> {
        let link = self.link_at(index);
        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.data)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.iter().position(|element| element == value)
    }
}

// ============================================================================
// API (pub)
// ============================================================================
impl ForwardList {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a value.
    pub fn push_head(&mut self, value: String) {
        self.insert_node(0, value);
    }

    /// Appends a value. Walks the chain, `O(n)`.
    pub fn push_tail(&mut self, value: String) {
        self.insert_node(self.len, value);
    }

    /// Inserts `value` in front of the first element equal to `target`.
    ///
    /// # Returns
    /// `false` if `target` is not in the list (list unchanged).
    pub fn insert_before(&mut self, target: &str, value: String) -> bool {
        match self.position(target) {
            Some(index) => {
                self.insert_node(index, value);
                true
            }
            None => false,
        }
    }

    /// Inserts `value` behind the first element equal to `target`.
    ///
    /// # Returns
    /// `false` if `target` is not in the list (list unchanged).
    pub fn insert_after(&mut self, target: &str, value: String) -> bool {
        match self.position(target) {
            Some(index) => {
                self.insert_node(index + 1, value);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn delete_head(&mut self) -> Result<String, ContainerError> {
        self.remove_node(0).ok_or(ContainerError::Empty(NAME))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn delete_tail(&mut self) -> Result<String, ContainerError> {
        match self.len.checked_sub(1) {
            Some(last) => self.remove_node(last).ok_or(ContainerError::Empty(NAME)),
            None => Err(ContainerError::Empty(NAME)),
        }
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if no element matched.
    pub fn delete_value(&mut self, value: &str) -> bool {
        self.position(value)
            .and_then(|index| self.remove_node(index))
            .is_some()
    }

    /// Removes the element directly in front of the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if `value` is missing or is the head.
    pub fn delete_before(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(index) if index > 0 => self.remove_node(index - 1).is_some(),
            _ => false,
        }
    }

    /// Removes the element directly behind the first element equal to `value`.
    ///
    /// # Returns
    /// `false` if `value` is missing or is the tail.
    pub fn delete_after(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(index) if index + 1 < self.len => self.remove_node(index + 1).is_some(),
            _ => false,
        }
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn head(&self) -> Result<&str, ContainerError> {
        self.iter().next().ok_or(ContainerError::Empty(NAME))
    }

    /// Returns the last element. Walks the chain, `O(n)`.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the list is empty.
    pub fn tail(&self) -> Result<&str, ContainerError> {
        self.iter().last().ok_or(ContainerError::Empty(NAME))
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
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Container for ForwardList {
    fn len(&self) -> usize {
        self.len
    }

    fn is_member(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }

    fn restore(&mut self, value: String) {
        self.push_tail(value);
    }

    fn restore_all(&mut self, values: Vec<String>) {
        let added = values.len();
        let mut cursor = self.link_at(self.len);
        for value in values {
            let node = cursor.insert(Box::new(FNode { data: value, next: None }));
            cursor = &mut node.next;
        }
        self.len += added;
    }

    fn clear(&mut self) {
        release_chain(self.head.take());
        self.len = 0;
    }
}

impl FromIterator<String> for ForwardList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let values: Vec<String> = iter.into_iter().collect();
        let mut list = ForwardList::new();
        for value in values.into_iter().rev() {
            list.push_head(value);
        }
        list
    }
}

impl Clone for ForwardList {
    fn clone(&self) -> Self {
        self.iter().map(str::to_string).collect()
    }
}

impl PartialEq for ForwardList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ForwardList {}

impl fmt::Debug for ForwardList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for ForwardList {
    fn drop(&mut self) {
        release_chain(self.head.take());
    }
}

/// Releases a chain node by node, so long lists do not recurse on drop.
fn release_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

// =#========================================================================#=
// ITERATOR
// =#========================================================================#=
/// Iterator over a [ForwardList], head to tail.
pub struct Iter<'a> {
    next: Option<&'a FNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.data.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut list = ForwardList::new();
        for i in 0..200_000 {
            list.push_head(i.to_string());
        }
        assert_eq!(list.len(), 200_000);
        assert_eq!(list.clone(), list);
        drop(list);
    }

    #[test]
    fn test_restore_all_appends_behind_existing_values() {
        let mut list = ForwardList::new();
        list.push_tail("a".to_string());
        list.restore_all(vec!["b".to_string(), "c".to_string()]);
        list.restore_all(Vec::new());
        list.push_tail("d".to_string());

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.tail().unwrap(), "d");
    }

    #[test]
    fn test_link_at_past_end_stops_at_tail_link() {
        let mut list = ForwardList::new();
        list.push_tail("a".to_string());
        assert!(list.link_at(5).is_none());
    }
}
