//! LIFO stack of string values.

use crate::model::container::{Container, ContainerError};

// =#========================================================================#=
// STACK
// =#========================================================================#=
/// Last-in, first-out stack.
///
/// Elements are stored bottom to top, so [Container::values] yields them in
/// the order that rebuilds the same stack when pushed again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stack {
    elements: Vec<String>,
}

impl Stack {
    /// Creates a new, empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a value on top.
    pub fn push(&mut self, value: String) {
        self.elements.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the stack is empty.
    pub fn pop(&mut self) -> Result<String, ContainerError> {
        self.elements.pop().ok_or(ContainerError::Empty("Stack"))
    }

    /// Returns the top value.
    ///
    /// # Errors
    /// [ContainerError::Empty] if the stack is empty.
    pub fn peek(&self) -> Result<&str, ContainerError> {
        self.elements
            .last()
            .map(String::as_str)
            .ok_or(ContainerError::Empty("Stack"))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements, top to bottom (pop order).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().rev().map(String::as_str)
    }
}

impl Container for Stack {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn is_member(&self, value: &str) -> bool {
        self.elements.iter().any(|element| element == value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.elements.iter().map(String::as_str))
    }

    fn restore(&mut self, value: String) {
        self.push(value);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}
