//! Registry configuration.

/// Default number of slots in a registry.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default maximum length of an entry name in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 31;

// =#========================================================================#=
// STORE CONFIG
// =#========================================================================#=
/// Settings for a [Registry](crate::store::Registry).
///
/// # Example
/// ```
/// use dsbox::config::StoreConfig;
/// use dsbox::store::Registry;
///
/// let config = StoreConfig::default().with_capacity(8).with_max_name_len(16);
/// let registry = Registry::with_config(config);
/// assert_eq!(registry.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    capacity: usize,
    max_name_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            capacity: DEFAULT_CAPACITY,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl StoreConfig {
    /// Sets the number of slots; creating a new name beyond it fails.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum entry name length in bytes.
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum entry name length in bytes.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }
}
