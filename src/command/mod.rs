//! Line-oriented command dispatcher over a [Registry].
//!
//! A line is parsed into a [Command], executed against the registry and
//! answered with an [Outcome]: the lines to print and whether the registry
//! changed. A [Session] adds write-back to a storage file after every
//! modifying command.
//!
//! # Example
//! ```
//! use dsbox::command::execute_line;
//! use dsbox::store::Registry;
//!
//! let mut registry = Registry::new();
//! execute_line(&mut registry, "SCREATE s")?;
//! execute_line(&mut registry, "SPUSH s A")?;
//! execute_line(&mut registry, "SPUSH s B")?;
//!
//! let outcome = execute_line(&mut registry, "SPOP s")?;
//! assert_eq!(outcome.output, vec!["B"]);
//! assert!(outcome.modified);
//! # Ok::<(), dsbox::command::CommandError>(())
//! ```

/// English help table
pub mod help;
/// Command line grammar
pub mod parser;

pub use parser::{ArrayOp, Command, ListOp, QueueOp, StackOp, TreeOp};

use crate::model::ContainerError;
use crate::parser::ParsingError;
use crate::store::{Collection, CollectionKind, Registry, StoreError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

const OK: &str = "OK";
const NOT_FOUND: &str = "Not Found";

// =#========================================================================#=
// COMMAND ERROR
// =#========================================================================#=
/// Failure of a single command; the registry keeps its last valid state.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParsingError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ContainerError> for CommandError {
    fn from(err: ContainerError) -> Self {
        CommandError::Store(StoreError::from(err))
    }
}

// =#========================================================================#=
// OUTCOME
// =#========================================================================#=
/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Lines to print, in order
    pub output: Vec<String>,
    /// Whether the registry changed and should be written back
    pub modified: bool,
    /// Whether the command asked to end the session
    pub quit: bool,
}

impl Outcome {
    fn print(line: impl Into<String>) -> Self {
        Outcome {
            output: vec![line.into()],
            ..Outcome::default()
        }
    }

    fn modified(line: impl Into<String>) -> Self {
        Outcome {
            output: vec![line.into()],
            modified: true,
            quit: false,
        }
    }

    /// `OK` when `found` (and modified), `Not Found` otherwise.
    fn found(found: bool) -> Self {
        if found {
            Outcome::modified(OK)
        } else {
            Outcome::print(NOT_FOUND)
        }
    }
}

// ============================================================================
// Execution (pub)
// ============================================================================
/// Parses and executes one command line.
///
/// # Errors
/// [CommandError::Parse] for malformed lines, [CommandError::Store] for
/// failures reported by the registry or a collection.
pub fn execute_line(registry: &mut Registry, line: &str) -> Result<Outcome, CommandError> {
    let command = Command::parse(line)?;
    execute(registry, command)
}

/// Executes a parsed command.
///
/// Every command but `CREATE`, `HELP` and `QUIT` needs an existing entry;
/// a missing one fails with [StoreError::NotFound] and creates nothing.
///
/// # Errors
/// [CommandError::Store] for failures reported by the registry or a
/// collection.
pub fn execute(registry: &mut Registry, command: Command) -> Result<Outcome, CommandError> {
    debug!(?command, "Executing command");

    let (name, action) = match command {
        Command::Help => {
            return Ok(Outcome {
                output: help::help_lines(),
                ..Outcome::default()
            });
        }
        Command::Quit => {
            return Ok(Outcome {
                quit: true,
                ..Outcome::default()
            });
        }
        Command::Create { kind, name } => {
            registry.create(&name, kind)?;
            return Ok(Outcome::modified(OK));
        }
        Command::Print { name } => (name, Action::Print),
        Command::IsMember { name, value } => (name, Action::IsMember(value)),
        Command::Array { name, op } => (name, Action::Array(op)),
        Command::List { kind, name, op } => (name, Action::List(kind, op)),
        Command::Stack { name, op } => (name, Action::Stack(op)),
        Command::Queue { name, op } => (name, Action::Queue(op)),
        Command::Tree { name, op } => (name, Action::Tree(op)),
    };

    let entry = registry
        .find_mut(&name)
        .ok_or_else(|| StoreError::NotFound(name.clone()))?;
    action.apply(entry.collection_mut())
}

// ============================================================================
// Per-Entry Actions (private)
// ============================================================================
/// Command part applied to an existing entry.
enum Action {
    Print,
    IsMember(String),
    Array(ArrayOp),
    List(CollectionKind, ListOp),
    Stack(StackOp),
    Queue(QueueOp),
    Tree(TreeOp),
}

impl Action {
    fn apply(self, collection: &mut Collection) -> Result<Outcome, CommandError> {
        match self {
            Action::Print => Ok(Outcome::print(collection.display_values())),
            Action::IsMember(value) => is_member(collection, &value),
            Action::Array(op) => array(collection, op),
            Action::List(kind, op) => list(collection, kind, op),
            Action::Stack(op) => stack(collection, op),
            Action::Queue(op) => queue(collection, op),
            Action::Tree(op) => tree(collection, op),
        }
    }
}

fn is_member(collection: &Collection, value: &str) -> Result<Outcome, CommandError> {
    match collection.kind() {
        kind @ (CollectionKind::Stack | CollectionKind::Queue) => {
            Err(StoreError::invalid_type(kind, "ISMEMBER").into())
        }
        _ => {
            let found = collection.as_container().is_member(value);
            Ok(Outcome::print(if found { "TRUE" } else { "FALSE" }))
        }
    }
}

fn array(collection: &mut Collection, op: ArrayOp) -> Result<Outcome, CommandError> {
    let array = collection.as_array_mut(array_op_name(&op))?;
    let outcome = match op {
        ArrayOp::PushBack(value) => {
            array.push_back(value);
            Outcome::modified(OK)
        }
        ArrayOp::InsertAt(index, value) => {
            array.insert_at(to_index(index, array.len())?, value)?;
            Outcome::modified(OK)
        }
        ArrayOp::SetAt(index, value) => {
            array.set_at(to_index(index, array.len())?, value)?;
            Outcome::modified(OK)
        }
        ArrayOp::Get(index) => Outcome::print(array.get(to_index(index, array.len())?)?),
        ArrayOp::DeleteAt(index) => Outcome::modified(array.delete_at(to_index(index, array.len())?)?),
        ArrayOp::Length => Outcome::print(array.len().to_string()),
    };
    Ok(outcome)
}

/// Runs a list operation against a [ForwardList](crate::model::ForwardList)
/// or a [LinkedList](crate::model::LinkedList); both share the method names.
macro_rules! list_op {
    ($list:expr, $op:expr) => {{
        let list = $list;
        match $op {
            ListOp::PushHead(value) => {
                list.push_head(value);
                Outcome::modified(OK)
            }
            ListOp::PushTail(value) => {
                list.push_tail(value);
                Outcome::modified(OK)
            }
            ListOp::InsertBefore { target, value } => Outcome::found(list.insert_before(&target, value)),
            ListOp::InsertAfter { target, value } => Outcome::found(list.insert_after(&target, value)),
            ListOp::DeleteHead => Outcome::modified(list.delete_head()?),
            ListOp::DeleteTail => Outcome::modified(list.delete_tail()?),
            ListOp::DeleteValue(value) => Outcome::found(list.delete_value(&value)),
            ListOp::DeleteBefore(value) => Outcome::found(list.delete_before(&value)),
            ListOp::DeleteAfter(value) => Outcome::found(list.delete_after(&value)),
            ListOp::GetHead => Outcome::print(list.head()?),
            ListOp::GetTail => Outcome::print(list.tail()?),
            ListOp::GetAt(index) => Outcome::print(list.get_at(to_index(index, list.len())?)?),
        }
    }};
}

fn list(collection: &mut Collection, kind: CollectionKind, op: ListOp) -> Result<Outcome, CommandError> {
    let operation = format!("{}{}", kind.prefix(), list_op_name(&op));
    let outcome = match kind {
        CollectionKind::LinkedList => list_op!(collection.as_linked_list_mut(&operation)?, op),
        _ => list_op!(collection.as_forward_list_mut(&operation)?, op),
    };
    Ok(outcome)
}

fn stack(collection: &mut Collection, op: StackOp) -> Result<Outcome, CommandError> {
    let stack = collection.as_stack_mut(stack_op_name(&op))?;
    let outcome = match op {
        StackOp::Push(value) => {
            stack.push(value);
            Outcome::modified(OK)
        }
        StackOp::Pop => Outcome::modified(stack.pop()?),
        StackOp::Peek => Outcome::print(stack.peek()?),
        StackOp::Length => Outcome::print(stack.len().to_string()),
    };
    Ok(outcome)
}

fn queue(collection: &mut Collection, op: QueueOp) -> Result<Outcome, CommandError> {
    let queue = collection.as_queue_mut(queue_op_name(&op))?;
    let outcome = match op {
        QueueOp::Push(value) => {
            queue.push(value);
            Outcome::modified(OK)
        }
        QueueOp::Pop => Outcome::modified(queue.pop()?),
        QueueOp::Peek => Outcome::print(queue.peek()?),
        QueueOp::Length => Outcome::print(queue.len().to_string()),
    };
    Ok(outcome)
}

fn tree(collection: &mut Collection, op: TreeOp) -> Result<Outcome, CommandError> {
    let tree = collection.as_tree_mut(tree_op_name(&op))?;
    let outcome = match op {
        TreeOp::Insert(value) => {
            let inserted = tree.insert(value);
            Outcome {
                output: vec![OK.to_string()],
                modified: inserted,
                quit: false,
            }
        }
        TreeOp::Delete(value) => Outcome::found(tree.delete(value.as_str())),
        TreeOp::Get(value) => {
            if tree.contains(value.as_str()) {
                Outcome::print(value)
            } else {
                Outcome::print(NOT_FOUND)
            }
        }
    };
    Ok(outcome)
}

// ============================================================================
// Helpers (private)
// ============================================================================
/// Converts a signed command index, rejecting negative values as out of range.
fn to_index(index: i64, len: usize) -> Result<usize, ContainerError> {
    usize::try_from(index).map_err(|_| ContainerError::OutOfRange { index, len })
}

fn array_op_name(op: &ArrayOp) -> &'static str {
    match op {
        ArrayOp::PushBack(_) => "MPUSH_BACK",
        ArrayOp::InsertAt(..) => "MINSERT_AT",
        ArrayOp::SetAt(..) => "MSET_AT",
        ArrayOp::Get(_) => "MGET",
        ArrayOp::DeleteAt(_) => "MDEL_AT",
        ArrayOp::Length => "MLENGTH",
    }
}

fn list_op_name(op: &ListOp) -> &'static str {
    match op {
        ListOp::PushHead(_) => "PUSH_HEAD",
        ListOp::PushTail(_) => "PUSH_TAIL",
        ListOp::InsertBefore { .. } => "INS_BEFORE",
        ListOp::InsertAfter { .. } => "INS_AFTER",
        ListOp::DeleteHead => "DEL_HEAD",
        ListOp::DeleteTail => "DEL_TAIL",
        ListOp::DeleteValue(_) => "DEL_BY_VALUE",
        ListOp::DeleteBefore(_) => "DEL_BEFORE",
        ListOp::DeleteAfter(_) => "DEL_AFTER",
        ListOp::GetHead => "GET_HEAD",
        ListOp::GetTail => "GET_TAIL",
        ListOp::GetAt(_) => "GET_AT",
    }
}

fn stack_op_name(op: &StackOp) -> &'static str {
    match op {
        StackOp::Push(_) => "SPUSH",
        StackOp::Pop => "SPOP",
        StackOp::Peek => "SPEAK",
        StackOp::Length => "SLENGTH",
    }
}

fn queue_op_name(op: &QueueOp) -> &'static str {
    match op {
        QueueOp::Push(_) => "QPUSH",
        QueueOp::Pop => "QPOP",
        QueueOp::Peek => "QPEEK",
        QueueOp::Length => "QLENGTH",
    }
}

fn tree_op_name(op: &TreeOp) -> &'static str {
    match op {
        TreeOp::Insert(_) => "TINSERT",
        TreeOp::Delete(_) => "TDEL",
        TreeOp::Get(_) => "TGET",
    }
}

// =#========================================================================#=
// SESSION
// =#========================================================================#=
/// A registry bound to its storage file.
///
/// The registry is loaded on [open](Session::open) and written back after
/// every command that modified it. A failed write is reported but the
/// in-memory state is kept.
#[derive(Debug)]
pub struct Session {
    registry: Registry,
    path: PathBuf,
}

impl Session {
    /// Loads the registry stored at `path` (empty if the file is missing).
    ///
    /// A file with more entries than `registry` has slots is refused, since
    /// the next write-back would drop the entries that did not fit.
    ///
    /// # Errors
    /// - [StoreError::Io] if the file exists but cannot be read
    /// - [StoreError::StoredOverCapacity] if the stored entries do not fit
    pub fn open<P: AsRef<Path>>(path: P, mut registry: Registry) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let summary = registry.load_from_file(&path)?;
        if summary.over_capacity > 0 {
            return Err(StoreError::StoredOverCapacity {
                path,
                capacity: registry.capacity(),
                dropped: summary.over_capacity,
            });
        }
        Ok(Session { registry, path })
    }

    /// Executes one line and writes the registry back if it changed.
    ///
    /// # Errors
    /// - the command's own error (nothing is written)
    /// - [StoreError::Io] if the write-back fails; the command itself has
    ///   already taken effect in memory
    pub fn run_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let outcome = execute_line(&mut self.registry, line)?;
        if outcome.modified {
            if let Err(err) = self.registry.save_to_file(&self.path) {
                error!(path = %self.path.display(), "Write-back failed: {err}");
                return Err(err.into());
            }
        }
        Ok(outcome)
    }

    /// Returns the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the storage file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
