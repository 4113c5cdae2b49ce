//! Source management for the Larch front end.
//!
//! A [`SourceMap`] owns the text of every loaded source, hands out stable
//! 1-based [`SourceId`]s, and resolves compact [`SourceLocation`]s (a
//! source id plus a byte offset) into human-readable
//! [`ResolvedLocation`]s via a per-source line-offset table.
//!
//! Everything derived from a map -- [`Source`] handles, cursors, scanned
//! tokens -- borrows from it and cannot outlive it; the map is the single
//! owner of all source text.

mod location;
mod source_map;

pub use location::{ResolvedLocation, SourceId, SourceLocation};
pub use source_map::{LoadError, Source, SourceMap};
