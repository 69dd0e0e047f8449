//! Parsing of single command lines into [Command] values.

use crate::parser::{ParsingError, ParsingErrorType, TokenParser};
use crate::store::CollectionKind;

// =#========================================================================#=
// COMMAND
// =#========================================================================#=
/// One parsed command line.
///
/// Command words are case-sensitive. Arguments beyond the expected ones are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `HELP`
    Help,
    /// `QUIT`
    Quit,
    /// `<X>CREATE <name>` with X one of `M F L S Q T`
    Create { kind: CollectionKind, name: String },
    /// `PRINT <name>`
    Print { name: String },
    /// `ISMEMBER <name> <value>`
    IsMember { name: String, value: String },
    /// `M...` commands
    Array { name: String, op: ArrayOp },
    /// `F...` and `L...` commands; `kind` is the list kind named by the prefix
    List {
        kind: CollectionKind,
        name: String,
        op: ListOp,
    },
    /// `S...` commands
    Stack { name: String, op: StackOp },
    /// `Q...` commands
    Queue { name: String, op: QueueOp },
    /// `T...` commands
    Tree { name: String, op: TreeOp },
}

/// Array operations; indices are kept signed until bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayOp {
    PushBack(String),
    InsertAt(i64, String),
    SetAt(i64, String),
    Get(i64),
    DeleteAt(i64),
    Length,
}

/// Operations shared by both list kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    PushHead(String),
    PushTail(String),
    InsertBefore { target: String, value: String },
    InsertAfter { target: String, value: String },
    DeleteHead,
    DeleteTail,
    DeleteValue(String),
    DeleteBefore(String),
    DeleteAfter(String),
    GetHead,
    GetTail,
    GetAt(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    Push(String),
    Pop,
    Peek,
    Length,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    Push(String),
    Pop,
    Peek,
    Length,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOp {
    Insert(String),
    Delete(String),
    Get(String),
}

// ============================================================================
// Parsing (pub)
// ============================================================================
impl Command {
    /// Parses one command line.
    ///
    /// # Example
    /// ```
    /// use dsbox::command::{ArrayOp, Command};
    ///
    /// let command = Command::parse("MINSERT_AT arr 2 x").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Command::Array { name: "arr".into(), op: ArrayOp::InsertAt(2, "x".into()) }
    /// );
    /// ```
    ///
    /// # Errors
    /// - [ParsingErrorType::EmptyCommand] for a blank line
    /// - [ParsingErrorType::UnknownCommand] for an unknown command word
    /// - [ParsingErrorType::UnknownKind] for `CREATE` with a bad prefix
    /// - [ParsingErrorType::MissingArgument] if an argument is missing
    /// - [ParsingErrorType::InvalidIndex] if an index is not an integer
    pub fn parse(line: &str) -> Result<Command, ParsingError> {
        let mut parser = TokenParser::new(line);
        parser.skip_whitespace();
        let at_word = parser.clone();

        let Some(word) = parser.next_token() else {
            return Err(ParsingError::from_parser(ParsingErrorType::EmptyCommand, &parser));
        };

        match word {
            "HELP" => return Ok(Command::Help),
            "QUIT" => return Ok(Command::Quit),
            _ => {}
        }

        if let Some(prefix) = word.strip_suffix("CREATE") {
            let kind = single_char(prefix)
                .and_then(CollectionKind::from_prefix)
                .ok_or_else(|| ParsingError::unknown_kind(&at_word, prefix))?;
            let name = name(&mut parser)?;
            return Ok(Command::Create { kind, name });
        }

        match word {
            "PRINT" => return Ok(Command::Print { name: name(&mut parser)? }),
            "ISMEMBER" => {
                let name = name(&mut parser)?;
                let value = value(&mut parser)?;
                return Ok(Command::IsMember { name, value });
            }
            _ => {}
        }

        let mut chars = word.chars();
        let Some(kind) = chars.next().and_then(CollectionKind::from_prefix) else {
            return Err(ParsingError::unknown_command(&at_word, word));
        };
        let op = chars.as_str();
        let unknown = || ParsingError::unknown_command(&at_word, word);

        let name = name(&mut parser)?;
        let command = match kind {
            CollectionKind::Array => Command::Array {
                op: array_op(op, &mut parser)?.ok_or_else(unknown)?,
                name,
            },
            CollectionKind::ForwardList | CollectionKind::LinkedList => Command::List {
                kind,
                op: list_op(op, &mut parser)?.ok_or_else(unknown)?,
                name,
            },
            CollectionKind::Stack => Command::Stack {
                op: stack_op(op, &mut parser)?.ok_or_else(unknown)?,
                name,
            },
            CollectionKind::Queue => Command::Queue {
                op: queue_op(op, &mut parser)?.ok_or_else(unknown)?,
                name,
            },
            CollectionKind::Tree => Command::Tree {
                op: tree_op(op, &mut parser)?.ok_or_else(unknown)?,
                name,
            },
        };
        Ok(command)
    }
}

// ============================================================================
// Per-Kind Operations (private)
// ============================================================================
// Each reads the arguments of one operation word following the entry name.
// `Ok(None)` means the word is not an operation of that kind.

fn array_op(op: &str, p: &mut TokenParser<'_>) -> Result<Option<ArrayOp>, ParsingError> {
    let op = match op {
        "PUSH_BACK" => ArrayOp::PushBack(value(p)?),
        "INSERT_AT" => ArrayOp::InsertAt(p.expect_index()?, value(p)?),
        "SET_AT" => ArrayOp::SetAt(p.expect_index()?, value(p)?),
        "GET" => ArrayOp::Get(p.expect_index()?),
        "DEL_AT" => ArrayOp::DeleteAt(p.expect_index()?),
        "LENGTH" => ArrayOp::Length,
        _ => return Ok(None),
    };
    Ok(Some(op))
}

fn list_op(op: &str, p: &mut TokenParser<'_>) -> Result<Option<ListOp>, ParsingError> {
    let op = match op {
        "PUSH_HEAD" => ListOp::PushHead(value(p)?),
        "PUSH_TAIL" => ListOp::PushTail(value(p)?),
        "INS_BEFORE" => ListOp::InsertBefore {
            target: target(p)?,
            value: value(p)?,
        },
        "INS_AFTER" => ListOp::InsertAfter {
            target: target(p)?,
            value: value(p)?,
        },
        "DEL_HEAD" => ListOp::DeleteHead,
        "DEL_TAIL" => ListOp::DeleteTail,
        "DEL_BY_VALUE" => ListOp::DeleteValue(value(p)?),
        "DEL_BEFORE" => ListOp::DeleteBefore(value(p)?),
        "DEL_AFTER" => ListOp::DeleteAfter(value(p)?),
        "GET_HEAD" => ListOp::GetHead,
        "GET_TAIL" => ListOp::GetTail,
        "GET_AT" => ListOp::GetAt(p.expect_index()?),
        _ => return Ok(None),
    };
    Ok(Some(op))
}

fn stack_op(op: &str, p: &mut TokenParser<'_>) -> Result<Option<StackOp>, ParsingError> {
    let op = match op {
        "PUSH" => StackOp::Push(value(p)?),
        "POP" => StackOp::Pop,
        // SPEAK as documented in the help, SPEEK as the operation is named
        "PEAK" | "PEEK" => StackOp::Peek,
        "LENGTH" => StackOp::Length,
        _ => return Ok(None),
    };
    Ok(Some(op))
}

fn queue_op(op: &str, p: &mut TokenParser<'_>) -> Result<Option<QueueOp>, ParsingError> {
    let op = match op {
        "PUSH" => QueueOp::Push(value(p)?),
        "POP" => QueueOp::Pop,
        "PEEK" => QueueOp::Peek,
        "LENGTH" => QueueOp::Length,
        _ => return Ok(None),
    };
    Ok(Some(op))
}

fn tree_op(op: &str, p: &mut TokenParser<'_>) -> Result<Option<TreeOp>, ParsingError> {
    let op = match op {
        "INSERT" => TreeOp::Insert(value(p)?),
        "DEL" => TreeOp::Delete(value(p)?),
        "GET" => TreeOp::Get(value(p)?),
        _ => return Ok(None),
    };
    Ok(Some(op))
}

// ============================================================================
// Argument Helpers (private)
// ============================================================================
fn name(parser: &mut TokenParser<'_>) -> Result<String, ParsingError> {
    parser.expect_token("name").map(str::to_string)
}

fn value(parser: &mut TokenParser<'_>) -> Result<String, ParsingError> {
    parser.expect_token("value").map(str::to_string)
}

fn target(parser: &mut TokenParser<'_>) -> Result<String, ParsingError> {
    parser.expect_token("target").map(str::to_string)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
