//! Named collection registry.
//!
//! A [Registry] owns up to `capacity` entries, each a name plus a
//! [Collection] of one [CollectionKind]. It also owns the line-based text
//! format the whole registry is persisted in:
//!
//! ```text
//! ARRAY a x y z
//! STACK s bottom top
//! TREE t apple banana cherry
//! ```
//!
//! Kind mismatches, bad names, a full registry and index errors inside a
//! collection are all reported as [StoreError].

/// Collection kinds and the kind-tagged collection payload
pub mod collection;
/// Slot table, lifecycle and persistence
pub mod registry;
/// Store error type
pub mod store_error;

pub use collection::{Collection, CollectionKind};
pub use registry::{Entry, LoadSummary, Registry};
pub use store_error::StoreError;
