//! Whitespace-delimited token scanner for command lines and stored lines.
//!
//! [TokenParser] walks a borrowed `&str` byte by byte, hands out tokens as
//! slices of the input and keeps its position for error reporting.

use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// TOKEN PARSER
// =#========================================================================#=
/// A scanner splitting a line into whitespace-delimited tokens.
///
/// Whitespace is space, tab, newline, carriage return, form feed and
/// vertical tab. Tokens are returned as slices of the input, so no
/// allocation happens while scanning.
///
/// # Example
/// ```
/// use dsbox::parser::TokenParser;
///
/// let mut parser = TokenParser::new("MGET  arr 3");
/// assert_eq!(parser.next_token(), Some("MGET"));
/// assert_eq!(parser.expect_token("name").unwrap(), "arr");
/// assert_eq!(parser.expect_index().unwrap(), 3);
/// assert!(parser.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct TokenParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> TokenParser<'a> {
    /// Creates a new `TokenParser` positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of input
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Skips (consumes) all consecutive whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.next();
            } else {
                break;
            }
        }
    }

    /// Returns the next token, or `None` if only whitespace is left.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let start = self.position;
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                break;
            }
            self.next();
        }

        // whitespace is ASCII, so both ends lie on char boundaries
        (self.position > start).then(|| &self.input[start..self.position])
    }

    /// Returns the next token, failing if there is none.
    ///
    /// # Arguments
    /// * `what` - Name of the expected argument, used in the error
    ///
    /// # Errors
    /// `MissingArgument` at the end of the input.
    pub fn expect_token(&mut self, what: &str) -> Result<&'a str, ParsingError> {
        match self.next_token() {
            Some(token) => Ok(token),
            None => Err(ParsingError::missing_argument(self, what)),
        }
    }

    /// Returns the next token parsed as a signed index.
    ///
    /// Negative values are accepted here and left to the bounds check of the
    /// collection they address.
    ///
    /// # Errors
    /// - `MissingArgument` at the end of the input
    /// - `InvalidIndex` if the token is not an integer
    pub fn expect_index(&mut self) -> Result<i64, ParsingError> {
        let start = self.position;
        let token = self.expect_token("index")?;
        match token.parse() {
            Ok(index) => Ok(index),
            Err(_) => {
                self.position = start;
                self.skip_whitespace();
                Err(ParsingError::invalid_index(self, token))
            }
        }
    }

    /// Returns whether only whitespace (or nothing) is left.
    pub fn is_exhausted(&self) -> bool {
        self.input.as_bytes()[self.position.min(self.input.len())..]
            .iter()
            .all(|&b| is_whitespace(b))
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 at the cut is replaced with the Unicode replacement
    /// character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        let bytes = self.input.as_bytes();
        let start = self.position.min(bytes.len());
        let end = (start + k).min(bytes.len());
        String::from_utf8_lossy(&bytes[start..end]).into_owned()
    }
}

/// Token delimiters: ASCII whitespace plus vertical tab, matching the ASCII
/// characters rejected in entry names.
#[inline]
fn is_whitespace(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}
