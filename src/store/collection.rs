//! Closed set of collection kinds and the tagged payload owning one instance.

use crate::io::defs::{KW_ARRAY, KW_FLIST, KW_LLIST, KW_QUEUE, KW_STACK, KW_TREE};
use crate::model::{AvlTree, Container, DynamicArray, ForwardList, LinkedList, Queue, Stack};
use crate::store::StoreError;
use std::fmt;

// =#========================================================================#=
// COLLECTION KIND
// =#========================================================================#=
/// The six kinds of collection an entry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Resizable array (`ARRAY`, command prefix `M`)
    Array,
    /// Singly linked list (`FLIST`, command prefix `F`)
    ForwardList,
    /// Doubly linked list (`LLIST`, command prefix `L`)
    LinkedList,
    /// LIFO stack (`STACK`, command prefix `S`)
    Stack,
    /// FIFO queue (`QUEUE`, command prefix `Q`)
    Queue,
    /// AVL tree (`TREE`, command prefix `T`)
    Tree,
}

impl CollectionKind {
    /// All kinds, in keyword order of the persisted format.
    pub const ALL: [CollectionKind; 6] = [
        CollectionKind::Array,
        CollectionKind::ForwardList,
        CollectionKind::LinkedList,
        CollectionKind::Stack,
        CollectionKind::Queue,
        CollectionKind::Tree,
    ];

    /// Returns the keyword used for this kind in the persisted format.
    pub fn keyword(&self) -> &'static str {
        match self {
            CollectionKind::Array => KW_ARRAY,
            CollectionKind::ForwardList => KW_FLIST,
            CollectionKind::LinkedList => KW_LLIST,
            CollectionKind::Stack => KW_STACK,
            CollectionKind::Queue => KW_QUEUE,
            CollectionKind::Tree => KW_TREE,
        }
    }

    /// Looks up a kind by its persisted-format keyword (exact match).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Returns the single-letter command prefix of this kind.
    pub fn prefix(&self) -> char {
        match self {
            CollectionKind::Array => 'M',
            CollectionKind::ForwardList => 'F',
            CollectionKind::LinkedList => 'L',
            CollectionKind::Stack => 'S',
            CollectionKind::Queue => 'Q',
            CollectionKind::Tree => 'T',
        }
    }

    /// Looks up a kind by its command prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =#========================================================================#=
// COLLECTION
// =#========================================================================#=
/// A collection instance tagged with its kind.
///
/// The tag is the enum variant itself, so kind and payload cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Array(DynamicArray),
    ForwardList(ForwardList),
    LinkedList(LinkedList),
    Stack(Stack),
    Queue(Queue),
    Tree(AvlTree<String>),
}

impl Collection {
    /// Creates an empty collection of the given kind.
    pub fn new(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::Array => Collection::Array(DynamicArray::new()),
            CollectionKind::ForwardList => Collection::ForwardList(ForwardList::new()),
            CollectionKind::LinkedList => Collection::LinkedList(LinkedList::new()),
            CollectionKind::Stack => Collection::Stack(Stack::new()),
            CollectionKind::Queue => Collection::Queue(Queue::new()),
            CollectionKind::Tree => Collection::Tree(AvlTree::new()),
        }
    }

    /// Returns the kind of this collection.
    pub fn kind(&self) -> CollectionKind {
        match self {
            Collection::Array(_) => CollectionKind::Array,
            Collection::ForwardList(_) => CollectionKind::ForwardList,
            Collection::LinkedList(_) => CollectionKind::LinkedList,
            Collection::Stack(_) => CollectionKind::Stack,
            Collection::Queue(_) => CollectionKind::Queue,
            Collection::Tree(_) => CollectionKind::Tree,
        }
    }

    /// Returns the payload through the uniform [Container] interface.
    pub fn as_container(&self) -> &dyn Container {
        match self {
            Collection::Array(array) => array,
            Collection::ForwardList(list) => list,
            Collection::LinkedList(list) => list,
            Collection::Stack(stack) => stack,
            Collection::Queue(queue) => queue,
            Collection::Tree(tree) => tree,
        }
    }

    /// Mutable variant of [as_container](Collection::as_container).
    pub fn as_container_mut(&mut self) -> &mut dyn Container {
        match self {
            Collection::Array(array) => array,
            Collection::ForwardList(list) => list,
            Collection::LinkedList(list) => list,
            Collection::Stack(stack) => stack,
            Collection::Queue(queue) => queue,
            Collection::Tree(tree) => tree,
        }
    }

    /// Returns the display form: values joined by single spaces.
    ///
    /// Uses natural order, except for the stack which is shown top to bottom.
    pub fn display_values(&self) -> String {
        match self {
            Collection::Stack(stack) => stack.iter().collect::<Vec<_>>().join(" "),
            other => other.as_container().values().collect::<Vec<_>>().join(" "),
        }
    }
}

// ============================================================================
// Typed Access (pub)
// ============================================================================
macro_rules! typed_access {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        /// Returns the payload if this collection is of the matching kind.
        ///
        /// # Errors
        /// [StoreError::InvalidType] naming `operation` otherwise.
        pub fn $fn_name(&mut self, operation: &str) -> Result<&mut $ty, StoreError> {
            match self {
                Collection::$variant(inner) => Ok(inner),
                other => Err(StoreError::invalid_type(other.kind(), operation)),
            }
        }
    };
}

impl Collection {
    typed_access!(as_array_mut, Array, DynamicArray);
    typed_access!(as_forward_list_mut, ForwardList, ForwardList);
    typed_access!(as_linked_list_mut, LinkedList, LinkedList);
    typed_access!(as_stack_mut, Stack, Stack);
    typed_access!(as_queue_mut, Queue, Queue);
    typed_access!(as_tree_mut, Tree, AvlTree<String>);
}
