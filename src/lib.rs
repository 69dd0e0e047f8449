//! dsbox is a sandbox of named in-memory collections of string values.
//!
//! Collections live in a fixed-capacity [Registry] under unique names and
//! are persisted as plain text, one line per collection.
//! Core functionality provided:
//! - Collections (see [crate::model]):
//!   - [AvlTree]: self-balancing binary search tree, rebalanced by rotations
//!     on every insertion and deletion.
//!   - Dynamic array, singly and doubly linked list, stack and queue.
//!   - All of them implement the [Container](model::Container) trait.
//! - Registry (see [crate::store]):
//!   - Slots are allocated lowest-first; creating a name that exists replaces
//!     its collection in place.
//!   - Kind-tagged payload ([Collection](store::Collection)), so a command can
//!     never reach a collection of the wrong kind.
//! - Persistence (see [crate::io]): `<KEYWORD> <name> <value>*` lines, no
//!   header; unknown lines are skipped on load.
//! - Commands (see [crate::command]): the line-oriented command language of
//!   the `dsbox` binary, with write-back after every change.
//!
//! Limitations:
//! - Values are single whitespace-free tokens; nothing is escaped.
//! - Single-threaded; a registry is owned by one caller.
//!
//! # Usage patterns
//! 1. Use the collections directly, e.g. [AvlTree] for any `K: Ord`.
//! 2. Drive a [Registry] through its API or through command lines.
//!
//! ## Example Tree
//! ```
//! use dsbox::AvlTree;
//!
//! let tree: AvlTree<i32> = (1..=7).collect();
//! assert_eq!(tree.root().map(|node| *node.key()), Some(4));
//! assert_eq!(tree.height(), 3);
//! assert!(tree.iter().copied().eq(1..=7));
//! ```
//!
//! ## Example Registry
//! ```no_run
//! use dsbox::store::CollectionKind;
//!
//! let mut registry = dsbox::load_file("store.txt")?;
//! registry.create("queue", CollectionKind::Queue)?.as_queue_mut("QPUSH")?.push("job".into());
//! dsbox::save_file(&registry, "store.txt")?;
//! # Ok::<(), dsbox::store::StoreError>(())
//! ```

pub mod command;
pub mod config;
pub mod io;
pub mod model;
pub mod parser;
pub mod store;

pub use crate::model::AvlTree;
pub use crate::store::{Registry, StoreError};

use std::path::Path;

// ============================================================================
// Quick Store API
// ============================================================================
/// Loads a registry with default settings from the file at `path`.
///
/// A missing file yields an empty registry.
///
/// See [`Registry::load_from_file`] for full documentation.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Registry, StoreError> {
    let mut registry = Registry::new();
    registry.load_from_file(path)?;
    Ok(registry)
}

/// Writes `registry` to the file at `path`, overwriting it.
///
/// See [`Registry::save_to_file`] for full documentation.
pub fn save_file<P: AsRef<Path>>(registry: &Registry, path: P) -> Result<(), StoreError> {
    registry.save_to_file(path)
}
