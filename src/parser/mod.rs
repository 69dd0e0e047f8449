//! Tokenizing and error reporting for line-oriented input.
//!
//! [TokenParser] splits command lines and stored registry lines into
//! whitespace-delimited tokens; [ParsingError] reports what was expected and
//! where.

pub mod parsing_error;
pub mod token_parser;

pub use parsing_error::{ParsingError, ParsingErrorType};
pub use token_parser::TokenParser;
