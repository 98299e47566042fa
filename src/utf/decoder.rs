//! Decoding entry points.
//!
//! One linear pass: header, tree segment, string segment, data alignment,
//! node records, names. The segment buffers live only as long as the
//! [`EntryIterator`] that owns them; callers get back owned entries.

use std::io::{Cursor, Read, Seek};
use log::{debug, info};
use super::format::{header, nodes, segments, strings::StringTable};
use super::iter::EntryIterator;
use super::types::error::Result;
use super::types::models::{ContainerHeader, Entry};

/// A fully validated container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub header: ContainerHeader,
    /// Entries in tree-segment order.
    pub entries: Vec<Entry>,
}

/// Decodes a container from the current stream position and returns its
/// `(record, name)` entries in tree-segment order.
///
/// Fails on the first violated format invariant; no partial listing is
/// returned.
pub fn decode<R: Read + Seek>(file: &mut R) -> Result<Vec<Entry>> {
    decode_container(file).map(|container| container.entries)
}

/// Decodes an in-memory container.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<Entry>> {
    decode(&mut Cursor::new(bytes))
}

/// Like [`decode`], but also returns the parsed header.
///
/// The stream is left at the start of the data segment.
pub fn decode_container<R: Read + Seek>(file: &mut R) -> Result<Container> {
    let entries = iter_entries(file)?;
    let header = *entries.header();
    let entries = entries.collect::<Result<Vec<_>>>()?;

    info!("UTF container decoded: {} entries", entries.len());
    Ok(Container { header, entries })
}

/// Reads the header and both segments, then hands back an iterator that
/// decodes records and resolves names one at a time.
///
/// Header and layout errors surface here; record and name errors surface
/// from the iterator. The stream is left at the start of the data segment
/// and is not needed afterwards.
pub fn iter_entries<R: Read + Seek>(file: &mut R) -> Result<EntryIterator> {
    let header = header::parse(file)?;
    // Reject a bad tree size before reading either segment.
    let count = nodes::node_count(&header)?;

    let segments::Segments { tree, strings } = segments::extract(file, &header)?;
    debug!("Decoding {} node records", count);
    EntryIterator::new(header, tree, StringTable::new(strings))
}
