//! Error types for command line parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for reporting
//! malformed command lines together with the position they occurred at.

use crate::parser::token_parser::TokenParser;
use std::fmt;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing a command line.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum ParsingErrorType {
    #[error("Missing argument <{0}>")]
    MissingArgument(String),
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Invalid index '{0}'")]
    InvalidIndex(String),
    #[error("Unknown structure type '{0}' for CREATE")]
    UnknownKind(String),
    #[error("Empty command")]
    EmptyCommand,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser(kind: ParsingErrorType, parser: &TokenParser<'_>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for MissingArgument
    pub fn missing_argument(parser: &TokenParser<'_>, what: &str) -> Self {
        Self::from_parser(ParsingErrorType::MissingArgument(what.to_string()), parser)
    }

    /// Convenience constructor for UnknownCommand
    pub fn unknown_command(parser: &TokenParser<'_>, word: &str) -> Self {
        Self::from_parser(ParsingErrorType::UnknownCommand(word.to_string()), parser)
    }

    /// Convenience constructor for InvalidIndex
    pub fn invalid_index(parser: &TokenParser<'_>, token: &str) -> Self {
        Self::from_parser(ParsingErrorType::InvalidIndex(token.to_string()), parser)
    }

    /// Convenience constructor for UnknownKind
    pub fn unknown_kind(parser: &TokenParser<'_>, word: &str) -> Self {
        Self::from_parser(ParsingErrorType::UnknownKind(word.to_string()), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)?;

        if !self.context.trim().is_empty() {
            write!(f, " (near '{}')", self.context.trim_end())?;
        }

        Ok(())
    }
}

impl std::error::Error for ParsingError {}
