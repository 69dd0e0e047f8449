//! Uniform operation set shared by all collection kinds.

use thiserror::Error;

// =#========================================================================#=
// CONTAINER (Trait)
// =#========================================================================#=
/// Operations every collection kind offers to the registry.
///
/// Kind-specific mutators (push/pop, insert at position, ...) live on the
/// concrete types; this trait only covers what the registry needs to treat
/// all kinds uniformly: membership, size, ordered iteration for display and
/// persistence, and replaying persisted values.
///
/// # Natural order
/// [values](Container::values) yields elements in the order that, when fed
/// one by one through [restore](Container::restore) into an empty container,
/// rebuilds an identical container:
/// - array, lists, queue: front to back
/// - stack: bottom to top
/// - tree: ascending
pub trait Container {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `value` is an element of this container.
    fn is_member(&self, value: &str) -> bool;

    /// Returns the elements in natural order.
    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Adds a value through the kind's natural insertion primitive.
    fn restore(&mut self, value: String);

    /// Replays a whole line of persisted values in natural order.
    ///
    /// Equivalent to calling [restore](Container::restore) for each value;
    /// kinds whose single append walks the container override it to walk
    /// only once.
    fn restore_all(&mut self, values: Vec<String>) {
        for value in values {
            self.restore(value);
        }
    }

    /// Removes all elements.
    fn clear(&mut self);
}

// =#========================================================================#=
// CONTAINER ERROR
// =#========================================================================#=
/// Failure of a single container access; the container is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Index outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index
        index: i64,
        /// Length of the container at the time of access
        len: usize,
    },

    /// Pop, peek, head or tail access on an empty container.
    #[error("{0} is empty")]
    Empty(&'static str),
}

impl ContainerError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        ContainerError::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
