//! Resizable array of string values.

use crate::model::container::{Container, ContainerError};

/// Capacity an empty array starts with and never shrinks below.
const MIN_CAPACITY: usize = 4;

// =#========================================================================#=
// DYNAMIC ARRAY
// =#========================================================================#=
/// Index-addressable, resizable array.
///
/// Storage grows on demand and is halved once the array is filled to a
/// quarter of its capacity or less.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray {
    elements: Vec<String>,
}

impl Default for DynamicArray {
    fn default() -> Self {
        DynamicArray {
            elements: Vec::with_capacity(MIN_CAPACITY),
        }
    }
}

impl DynamicArray {
    /// Creates a new, empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value at the end.
    pub fn push_back(&mut self, value: String) {
        self.elements.push(value);
    }

    /// Inserts a value at `index`, shifting later elements back.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    /// [ContainerError::OutOfRange] if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: String) -> Result<(), ContainerError> {
        if index > self.elements.len() {
            return Err(ContainerError::out_of_range(index, self.elements.len()));
        }
        self.elements.insert(index, value);
        Ok(())
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    /// [ContainerError::OutOfRange] if `index >= len`.
    pub fn set_at(&mut self, index: usize, value: String) -> Result<(), ContainerError> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or_else(|| ContainerError::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Removes and returns the value at `index`, shifting later elements forward.
    ///
    /// # Errors
    /// [ContainerError::OutOfRange] if `index >= len`.
    pub fn delete_at(&mut self, index: usize) -> Result<String, ContainerError> {
        if index >= self.elements.len() {
            return Err(ContainerError::out_of_range(index, self.elements.len()));
        }
        let removed = self.elements.remove(index);

        let capacity = self.elements.capacity();
        if !self.elements.is_empty() && self.elements.len() <= capacity / 4 {
            self.elements.shrink_to((capacity / 2).max(MIN_CAPACITY));
        }
        Ok(removed)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    /// [ContainerError::OutOfRange] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&str, ContainerError> {
        self.elements
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ContainerError::out_of_range(index, self.elements.len()))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }
}

impl Container for DynamicArray {
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
        self.push_back(value);
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.elements.shrink_to(MIN_CAPACITY);
    }
}

impl FromIterator<String> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.elements.extend(iter);
        array
    }
}
