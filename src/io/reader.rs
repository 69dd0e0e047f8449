//! Registry reader for the line-based store format.

use crate::parser::TokenParser;
use crate::store::CollectionKind;
use tracing::debug;

// =#========================================================================#=
// STORE RECORD
// =#========================================================================#=
/// One parsed line of a stored registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
    /// 1-based line number in the input
    pub line: usize,
    /// Collection kind named by the keyword
    pub kind: CollectionKind,
    /// Entry name
    pub name: String,
    /// Values in natural order
    pub values: Vec<String>,
}

// =#========================================================================#=
// STORE READER
// =#========================================================================#=
/// Lazy iterator over the records of a stored registry.
///
/// Blank lines are skipped. Lines with an unknown keyword or without a name
/// are skipped as well and only logged at `debug` level.
///
/// # Example
/// ```
/// use dsbox::io::StoreReader;
/// use dsbox::store::CollectionKind;
///
/// let text = "QUEUE q a b\n\nBOGUS x 1\nTREE t\n";
/// let records: Vec<_> = StoreReader::new(text).collect();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].kind, CollectionKind::Queue);
/// assert_eq!(records[0].values, vec!["a", "b"]);
/// assert_eq!(records[1].name, "t");
/// assert!(records[1].values.is_empty());
/// ```
pub struct StoreReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> StoreReader<'a> {
    /// Creates a new reader over the full text of a stored registry.
    pub fn new(text: &'a str) -> Self {
        StoreReader {
            lines: text.lines().enumerate(),
        }
    }

    /// Parses a single line, returning `None` for lines to skip.
    fn parse_line(line_number: usize, line: &str) -> Option<StoreRecord> {
        let mut parser = TokenParser::new(line);
        let keyword = parser.next_token()?;

        let Some(kind) = CollectionKind::from_keyword(keyword) else {
            debug!(line = line_number, keyword, "Skipping line with unknown keyword");
            return None;
        };

        let Some(name) = parser.next_token() else {
            debug!(line = line_number, keyword, "Skipping line without name");
            return None;
        };

        let values = std::iter::from_fn(|| parser.next_token())
            .map(str::to_string)
            .collect();

        Some(StoreRecord {
            line: line_number,
            kind,
            name: name.to_string(),
            values,
        })
    }
}

impl Iterator for StoreReader<'_> {
    type Item = StoreRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if let Some(record) = Self::parse_line(index + 1, line) {
                return Some(record);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_exact() {
        assert!(StoreReader::parse_line(1, "tree t a").is_none());
        assert!(StoreReader::parse_line(1, "TREES t a").is_none());
        assert!(StoreReader::parse_line(1, "TREE t a").is_some());
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let records: Vec<_> = StoreReader::new("\nX\nSTACK\nSTACK s\r\n").collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 4);
        assert_eq!(records[0].name, "s");
    }
}
