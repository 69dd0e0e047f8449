//! Keywords and delimiters of the persisted registry format.

/// Keyword of a resizable array line
pub(crate) const KW_ARRAY: &str = "ARRAY";

/// Keyword of a singly linked list line
pub(crate) const KW_FLIST: &str = "FLIST";

/// Keyword of a doubly linked list line
pub(crate) const KW_LLIST: &str = "LLIST";

/// Keyword of a stack line
pub(crate) const KW_STACK: &str = "STACK";

/// Keyword of a queue line
pub(crate) const KW_QUEUE: &str = "QUEUE";

/// Keyword of a tree line
pub(crate) const KW_TREE: &str = "TREE";

/// Separator between keyword, name and values
pub(crate) const SEPARATOR: &[u8] = b" ";

/// Record terminator
pub(crate) const NEWLINE: &[u8] = b"\n";
