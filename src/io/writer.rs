//! Registry writer for the line-based store format.

use crate::io::defs::{NEWLINE, SEPARATOR};
use crate::store::{Entry, Registry};
use std::io;
use std::io::{BufWriter, Write};

// =#========================================================================#=
// STORE WRITER
// =#========================================================================#=
/// Buffered writer producing one line per registry entry.
///
/// # Format Structure
/// `<KEYWORD> <name>( <value>)*\n` for every live entry in slot order,
/// values in their natural order. No header, no escaping.
///
/// # Example
/// ```
/// use dsbox::io::StoreWriter;
/// use dsbox::store::{CollectionKind, Registry};
///
/// let mut registry = Registry::new();
/// registry.create("t", CollectionKind::Tree)?.as_tree_mut("TINSERT")?.insert("b".into());
///
/// let mut out = Vec::new();
/// StoreWriter::new(&mut out).write_registry(&registry)?;
/// assert_eq!(out, b"TREE t b\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StoreWriter<W: Write> {
    bw: BufWriter<W>,
}

// ============================================================================
// API (public)
// ============================================================================
impl<W: Write> StoreWriter<W> {
    /// Creates a new store writer on top of `writer`.
    pub fn new(writer: W) -> StoreWriter<W> {
        StoreWriter {
            bw: BufWriter::new(writer),
        }
    }

    /// Writes all live entries of `registry` and flushes.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails
    pub fn write_registry(&mut self, registry: &Registry) -> io::Result<()> {
        for entry in registry.entries() {
            self.entry(entry)?;
        }
        self.bw.flush()
    }
}

// ============================================================================
// Record Writing (private)
// ============================================================================
impl<W: Write> StoreWriter<W> {
    /// Writes one entry line, returning itself for chaining.
    fn entry(&mut self, entry: &Entry) -> io::Result<&mut Self> {
        // "<KEYWORD> <name>"
        self.write_all(entry.kind().keyword().as_bytes())?
            .space()?
            .write_all(entry.name().as_bytes())?;

        // " <value>" for each value
        for value in entry.collection().as_container().values() {
            self.space()?.write_all(value.as_bytes())?;
        }

        self.newline()
    }
}

// ============================================================================
// Little Helpers (private)
// ============================================================================
impl<W: Write> StoreWriter<W> {
    /// Appends a byte slice to the [BufWriter], returning itself for chaining.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<&mut Self> {
        self.bw.write_all(buf)?;
        Ok(self)
    }

    /// Appends the field separator, returning itself for chaining.
    fn space(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(SEPARATOR)?;
        Ok(self)
    }

    /// Appends the record terminator, returning itself for chaining.
    fn newline(&mut self) -> io::Result<&mut Self> {
        self.bw.write_all(NEWLINE)?;
        Ok(self)
    }
}
