//! The source map: owner of all loaded source text.
//!
//! Loading a file (or registering a virtual source) builds a
//! sentinel-terminated [`SourceBuffer`], scans it once for line starts,
//! and files it under the next sequential [`SourceId`]. Resolution
//! binary-searches the line-start table: the greatest line start at or
//! before an offset gives the line, and the distance from it the column.
//!
//! Loads are the only mutations; a map is written during [`load`]/[`add`]
//! and read-only afterwards. There is no internal locking -- callers that
//! load from several threads must serialize access to the map themselves.
//!
//! [`load`]: SourceMap::load
//! [`add`]: SourceMap::add

use std::io;
use std::path::{Path, PathBuf};

use larch_lexer::{Cursor, SourceBuffer};
use thiserror::Error;

use crate::location::{ResolvedLocation, SourceId, SourceLocation};

/// Error loading a source file into a [`SourceMap`].
///
/// Fatal to that load only; the map stays usable for other sources.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read in full. Invalid UTF-8
    /// content surfaces here too, as `io::ErrorKind::InvalidData`.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One loaded source: display name, owned text, line-start table.
struct SourceRecord {
    file_name: String,
    buffer: SourceBuffer,
    /// Byte offset where each line starts, strictly increasing. Entry `i`
    /// is line `i + 1`; entry 0 is always offset 0.
    line_offsets: Vec<u32>,
}

/// Owner of all loaded sources and issuer of [`SourceId`]s.
///
/// Handles and tokens derived from a map borrow from it and must not
/// outlive it.
#[derive(Default)]
pub struct SourceMap {
    sources: Vec<SourceRecord>,
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a virtual source under a display name.
    ///
    /// Builds the sentinel-terminated buffer and the line-start table
    /// eagerly and assigns the next sequential id. Fetch a handle to the
    /// text with [`get`](Self::get).
    pub fn add(&mut self, file_name: impl Into<String>, text: &str) -> SourceId {
        let buffer = SourceBuffer::new(text);
        let line_offsets = build_line_offsets(buffer.as_bytes());
        let id = SourceId(next_id(self.sources.len()));
        self.sources.push(SourceRecord {
            file_name: file_name.into(),
            buffer,
            line_offsets,
        });
        id
    }

    /// Load a file from disk and register it.
    ///
    /// Reads the whole file up front; any open or read failure is a
    /// [`LoadError::Io`] carrying the path. A clean end of file is not an
    /// error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<SourceId, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.add(path.display().to_string(), &text))
    }

    /// Fetch a handle to a previously registered source.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this map -- that is a caller bug,
    /// not a runtime condition.
    pub fn get(&self, id: SourceId) -> Source<'_> {
        Source {
            id,
            record: self.record(id),
        }
    }

    /// Resolve a compact location to a file name, line, and column.
    ///
    /// Binary-searches the line-start table for the greatest line start
    /// at or before the offset; that entry's 1-based index is the line,
    /// and the byte distance from it plus one is the column.
    ///
    /// # Panics
    ///
    /// Panics if the location's id was not issued by this map or its
    /// offset lies past the end of the source. Both indicate a caller
    /// bug; locations obtained from [`Source::location`] are always
    /// valid here.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the buffer length, which fits in u32"
    )]
    pub fn resolve(&self, loc: SourceLocation) -> ResolvedLocation<'_> {
        let record = self.record(loc.source());
        assert!(
            loc.offset() <= record.buffer.len(),
            "offset {} is past the end of '{}' ({} bytes)",
            loc.offset(),
            record.file_name,
            record.buffer.len()
        );

        let line_idx = match record.line_offsets.binary_search(&loc.offset()) {
            // Exact match: the offset is at a line start.
            Ok(exact) => exact,
            // Insertion point: the line containing the offset starts just
            // before it. Entry 0 is offset 0, so `insert` is never 0.
            Err(insert) => insert - 1,
        };
        let line_start = record.line_offsets[line_idx];

        ResolvedLocation {
            file_name: &record.file_name,
            line: line_idx as u32 + 1,
            column: loc.offset() - line_start + 1,
        }
    }

    /// Number of sources registered so far.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if no source has been registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn record(&self, id: SourceId) -> &SourceRecord {
        assert!(id.get() != 0, "source id 0 is reserved as invalid");
        self.sources
            .get(id.get() as usize - 1)
            .unwrap_or_else(|| panic!("source id {} was not issued by this map", id.get()))
    }
}

/// Immutable handle to one source in a [`SourceMap`].
///
/// Bundles the id with borrowed access to the text; everything it hands
/// out (text, cursors) lives as long as the map, not the handle.
#[derive(Clone, Copy)]
pub struct Source<'a> {
    id: SourceId,
    record: &'a SourceRecord,
}

impl<'a> Source<'a> {
    /// Id of this source within its map.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Display name the source was registered under.
    pub fn file_name(&self) -> &'a str {
        &self.record.file_name
    }

    /// The source text (sentinel excluded).
    pub fn text(&self) -> &'a str {
        self.record.buffer.as_str()
    }

    /// The sentinel-terminated buffer, for handing to a scanner.
    pub fn buffer(&self) -> &'a SourceBuffer {
        &self.record.buffer
    }

    /// A cursor over this source, positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'a> {
        self.record.buffer.cursor()
    }

    /// Location of the first byte of this source.
    pub fn start(&self) -> SourceLocation {
        self.location(0)
    }

    /// Location of a byte offset within this source.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `offset` lies past the end of the text.
    pub fn location(&self, offset: u32) -> SourceLocation {
        debug_assert!(
            offset <= self.record.buffer.len(),
            "offset {offset} is past the end of '{}'",
            self.record.file_name
        );
        SourceLocation::new(self.id, offset)
    }
}

/// Line-start table: offset 0, then every offset just past a `\n`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "buffer length is checked to fit in u32 at construction"
)]
fn build_line_offsets(text: &[u8]) -> Vec<u32> {
    let mut offsets = vec![0u32];
    for (i, byte) in text.iter().enumerate() {
        if *byte == b'\n' {
            // The next line starts at the byte after the newline.
            offsets.push((i + 1) as u32);
        }
    }
    offsets
}

/// Next sequential 1-based id for a map holding `count` sources.
fn next_id(count: usize) -> u32 {
    u32::try_from(count + 1).unwrap_or_else(|_| panic!("source count exceeds u32::MAX"))
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
mod tests;
