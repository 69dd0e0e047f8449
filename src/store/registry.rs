//! Fixed-capacity registry of named collections and its persistence.

use crate::config::StoreConfig;
use crate::io::{StoreReader, StoreWriter};
use crate::store::StoreError;
use crate::store::collection::{Collection, CollectionKind};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

// =#========================================================================#=
// ENTRY
// =#========================================================================#=
/// A named collection living in one registry slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    collection: Collection,
}

impl Entry {
    fn new(name: &str, kind: CollectionKind) -> Self {
        Entry {
            name: name.to_string(),
            collection: Collection::new(kind),
        }
    }

    /// Returns the entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of the held collection.
    pub fn kind(&self) -> CollectionKind {
        self.collection.kind()
    }

    /// Returns the held collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns the held collection mutably.
    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} ({} values)",
            self.kind(),
            self.name,
            self.collection.as_container().len()
        )
    }
}

// =#========================================================================#=
// LOAD SUMMARY
// =#========================================================================#=
/// Counts from replacing the registry content with stored text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines loaded as entries
    pub loaded: usize,
    /// Lines dropped because every slot was taken
    pub over_capacity: usize,
}

// =#========================================================================#=
// REGISTRY
// =#========================================================================#=
/// Owner of up to `capacity` named collections.
///
/// Slots are allocated lowest-first. Creating an entry under a name already in
/// use replaces its collection in the same slot. Entries are only removed all
/// at once through [destroy_all](Registry::destroy_all), either explicitly or
/// when a saved state is loaded.
///
/// # Example
/// ```
/// use dsbox::store::{CollectionKind, Registry};
///
/// let mut registry = Registry::new();
/// registry.create("s", CollectionKind::Stack)?.as_stack_mut("SPUSH")?.push("A".into());
/// assert_eq!(registry.serialize(), "STACK s A\n");
/// # Ok::<(), dsbox::store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    slots: Vec<Option<Entry>>,
    /// Indices of free slots; lowest is taken first
    free: BTreeSet<usize>,
    /// Name to slot index for every used slot
    index: HashMap<String, usize>,
    config: StoreConfig,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

// ============================================================================
// Construction & Lifecycle (pub)
// ============================================================================
impl Registry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with `capacity` slots and default name length.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StoreConfig::default().with_capacity(capacity))
    }

    /// Creates an empty registry from the given settings.
    pub fn with_config(config: StoreConfig) -> Self {
        Registry {
            slots: vec![None; config.capacity()],
            free: (0..config.capacity()).collect(),
            index: HashMap::with_capacity(config.capacity()),
            config,
        }
    }

    /// Creates an empty collection of `kind` under `name` and returns it.
    ///
    /// An existing entry of that name is replaced in place: its old
    /// collection is dropped, its slot is kept and the count is unchanged.
    ///
    /// # Errors
    /// - [StoreError::InvalidName] if `name` is empty, too long or contains
    ///   whitespace
    /// - [StoreError::CapacityExceeded] if `name` is new and no slot is free
    pub fn create(&mut self, name: &str, kind: CollectionKind) -> Result<&mut Collection, StoreError> {
        self.validate_name(name)?;

        let slot = match self.index.get(name) {
            Some(&slot) => {
                debug!(name, %kind, slot, "Replacing entry");
                slot
            }
            None => {
                let Some(slot) = self.free.pop_first() else {
                    warn!(name, capacity = self.capacity(), "Registry full, entry refused");
                    return Err(StoreError::CapacityExceeded {
                        capacity: self.capacity(),
                    });
                };
                debug!(name, %kind, slot, "Creating entry");
                self.index.insert(name.to_string(), slot);
                slot
            }
        };

        let entry = self.slots[slot].insert(Entry::new(name, kind));
        Ok(&mut entry.collection)
    }

    /// Drops every entry and marks all slots free.
    pub fn destroy_all(&mut self) {
        if !self.is_empty() {
            debug!(entries = self.len(), "Destroying all entries");
        }
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.free = (0..self.capacity()).collect();
        self.index.clear();
    }
}

// ============================================================================
// Lookup & Inspection (pub)
// ============================================================================
impl Registry {
    /// Returns the entry named `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.index
            .get(name)
            .and_then(|&slot| self.slots[slot].as_ref())
    }

    /// Returns the entry named `name` mutably, if any.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.index
            .get(name)
            .and_then(|&slot| self.slots[slot].as_mut())
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no entry is live.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the settings this registry was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the live entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().flatten()
    }

    /// Returns the slot index held by `name`, if any.
    pub fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

// ============================================================================
// Persistence (pub)
// ============================================================================
impl Registry {
    /// Serializes all entries in slot order, one line each.
    ///
    /// Line format: `<KEYWORD> <name>( <value>)*`, values in natural order.
    /// Values are not escaped, so values containing whitespace do not survive
    /// a round trip.
    pub fn serialize(&self) -> String {
        let mut buf = Vec::new();
        // writes into a Vec<u8> are infallible
        let _ = self.serialize_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serializes all entries into `writer`.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails
    pub fn serialize_to<W: Write>(&self, writer: W) -> io::Result<()> {
        StoreWriter::new(writer).write_registry(self)
    }

    /// Replaces the whole content by the entries described in `text`.
    ///
    /// Lines with an unknown keyword or without a name are skipped, as are
    /// lines with an invalid name and lines that would exceed the capacity.
    /// Returns the number of lines loaded. A name occurring twice keeps its
    /// last line.
    pub fn deserialize(&mut self, text: &str) -> usize {
        self.load_text(text).loaded
    }

    /// Same as [deserialize](Registry::deserialize), also counting the lines
    /// dropped for lack of free slots.
    pub fn load_text(&mut self, text: &str) -> LoadSummary {
        self.destroy_all();

        let mut summary = LoadSummary::default();
        for record in StoreReader::new(text) {
            match self.create(&record.name, record.kind) {
                Ok(collection) => {
                    collection.as_container_mut().restore_all(record.values);
                    summary.loaded += 1;
                }
                Err(err) => {
                    if matches!(err, StoreError::CapacityExceeded { .. }) {
                        summary.over_capacity += 1;
                    }
                    warn!(line = record.line, name = %record.name, "Skipping stored entry: {err}");
                }
            }
        }
        summary
    }

    /// Writes all entries to the file at `path`, overwriting it.
    ///
    /// # Errors
    /// [StoreError::Io] if the file cannot be created or written
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
        self.serialize_to(file)
            .map_err(|err| StoreError::io(path, err))?;
        info!(path = %path.display(), entries = self.len(), "Saved registry");
        Ok(())
    }

    /// Replaces the whole content by the entries stored in the file at `path`.
    ///
    /// A missing file leaves the registry empty and is not an error.
    ///
    /// # Errors
    /// [StoreError::Io] if the file exists but cannot be read
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary, StoreError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No stored registry, starting empty");
                self.destroy_all();
                return Ok(LoadSummary::default());
            }
            Err(err) => return Err(StoreError::io(path, err)),
        };

        let summary = self.load_text(&text);
        info!(path = %path.display(), entries = summary.loaded, "Loaded registry");
        Ok(summary)
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
impl Registry {
    fn validate_name(&self, name: &str) -> Result<(), StoreError> {
        let max_len = self.config.max_name_len();
        if name.is_empty() || name.len() > max_len || name.chars().any(char::is_whitespace) {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
                max_len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Registry with {}/{} entries", self.len(), self.capacity())?;
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some(entry) = entry {
                writeln!(f, "  [{slot}] {entry}")?;
            }
        }
        Ok(())
    }
}
