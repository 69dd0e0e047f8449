//! Error type for registry and collection operations.

use crate::model::ContainerError;
use crate::store::collection::CollectionKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =#========================================================================#=
// STORE ERROR
// =#========================================================================#=
/// Errors reported by the [Registry](crate::store::Registry) and the
/// operations dispatched through it.
///
/// Every error aborts only the current operation; the registry and its
/// collections stay in their last valid state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry with the given name exists.
    #[error("structure '{0}' not found")]
    NotFound(String),

    /// Registry is full and the name is new.
    #[error("maximum number of structures ({capacity}) reached")]
    CapacityExceeded {
        /// Configured number of slots
        capacity: usize,
    },

    /// Operation dispatched against an entry of an incompatible kind.
    #[error("{operation} is not supported for {kind}")]
    InvalidType {
        /// Kind of the targeted entry
        kind: CollectionKind,
        /// Name of the rejected operation
        operation: String,
    },

    /// Entry name empty, too long or containing whitespace.
    #[error("invalid structure name '{name}' (1 to {max_len} bytes, no whitespace)")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Configured maximum length
        max_len: usize,
    },

    /// Index or emptiness violation inside a collection.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// The storage file holds more entries than the registry has slots.
    #[error("'{path}' holds {dropped} structure(s) beyond the capacity of {capacity}")]
    StoredOverCapacity {
        /// Storage file path
        path: PathBuf,
        /// Configured number of slots
        capacity: usize,
        /// Stored entries that did not fit
        dropped: usize,
    },

    /// Reading or writing the storage file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Storage file path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn invalid_type(kind: CollectionKind, operation: impl Into<String>) -> Self {
        StoreError::InvalidType {
            kind,
            operation: operation.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
