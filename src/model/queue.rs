//! FIFO queue of string values.

use crate::model::container::{Container, ContainerError};
use std::collections::VecDeque;

// =#========================================================================#=
// QUEUE
// =#========================================================================#=
/// First-in, first-out queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Queue {
    elements: VecDeque<String>,
}

impl Queue {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value at the rear.
    pub fn push(&mut self, value: String) {
        self.elements.push_back(value);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the queue is empty.
    pub fn pop(&mut self) -> Result<String, ContainerError> {
        self.elements.pop_front().ok_or(ContainerError::Empty("Queue"))
    }

    /// Returns the front value.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the queue is empty.
    pub fn peek(&self) -> Result<&str, ContainerError> {
        self.elements
            .front()
            .map(String::as_str)
            .ok_or(ContainerError::Empty("Queue"))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements, front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }
}

impl Container for Queue {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn is_member(&self, value: &str) -> bool {
        self.elements.iter().any(|element| element == value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }

    fn restore(&mut self, value: String) {
        self.push(value);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}
