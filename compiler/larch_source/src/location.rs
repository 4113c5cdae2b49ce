//! Compact source locations and their resolved, human-facing form.

use std::fmt;

/// Stable identifier of one loaded source within a
/// [`SourceMap`](crate::SourceMap).
///
/// Ids are 1-based, issued sequentially, and never reused; 0 is reserved
/// as invalid. An id is meaningful only to the map that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(pub(crate) u32);

impl SourceId {
    /// Numeric value of the id (always >= 1).
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A lightweight source location: a source id plus a byte offset.
///
/// Cheap to copy and store (8 bytes); carries no text. Resolve it to a
/// file name, line, and column with
/// [`SourceMap::resolve`](crate::SourceMap::resolve) on the owning map.
/// Obtained from [`Source::location`](crate::Source::location), which
/// checks the offset against the source length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    source: SourceId,
    offset: u32,
}

impl SourceLocation {
    pub(crate) fn new(source: SourceId, offset: u32) -> Self {
        Self { source, offset }
    }

    /// Id of the source this location points into.
    #[inline]
    pub fn source(self) -> SourceId {
        self.source
    }

    /// Byte offset from the start of the source.
    #[inline]
    pub fn offset(self) -> u32 {
        self.offset
    }
}

/// A resolved source location: file name, line, and column.
///
/// Computed on demand by [`SourceMap::resolve`](crate::SourceMap::resolve),
/// never cached. Line and column are both 1-based; the column counts bytes
/// from the start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedLocation<'a> {
    /// Display name of the source. May include directory components or be
    /// a virtual name with no entry in the file system.
    pub file_name: &'a str,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for ResolvedLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}

// Size assertion: a location is two words of u32, nothing more.
const _: () = assert!(std::mem::size_of::<SourceLocation>() == 8);
