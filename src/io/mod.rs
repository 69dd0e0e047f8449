//! Reading and writing the persisted registry format.
//!
//! The format is line based, one entry per line:
//! `<KEYWORD> <name>( <value>)*`, with KEYWORD one of `ARRAY`, `FLIST`,
//! `LLIST`, `STACK`, `QUEUE` and `TREE`. There is no header and no version.
//! Tokens are separated by whitespace and never escaped.

pub(crate) mod defs;
/// Line reader yielding [StoreRecord]s
pub mod reader;
/// Buffered registry writer
pub mod writer;

pub use reader::{StoreReader, StoreRecord};
pub use writer::StoreWriter;
