//! Core data structures for UTF container components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Layout constants of the on-disk format
//! - The container header
//! - Node records and resolved entries
//! - Segment identifiers used in diagnostics

/// Header magic: ASCII `"UTF "` read as a big-endian u32.
pub const UTF_SIGNATURE: u32 = u32::from_be_bytes(*b"UTF ");

/// The only container version this crate understands.
pub const UTF_VERSION: u32 = 0x101;

/// Size of one node record in the tree segment, in bytes.
pub const NODE_RECORD_SIZE: u32 = 44;

/// Size of the fixed header (fourteen u32 fields), in bytes.
pub const HEADER_SIZE: u32 = 56;

/// Parsed and validated header of a UTF container.
///
/// All offsets are absolute byte positions in the source. The data segment
/// has no recorded size; it runs to the end of the source and is addressed
/// per node through [`NodeRecord::data_offset`] and [`NodeRecord::size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub signature: u32,
    pub version: u32,
    pub tree_segment_offset: u32,
    pub tree_segment_size: u32,
    pub node_record_size: u32,
    pub string_segment_offset: u32,
    pub string_segment_size: u32,
    pub data_segment_offset: u32,
    /// Last header field. Read and kept as-is, never validated.
    pub trailing: u32,
}

impl ContainerHeader {
    /// Number of whole node records the tree segment holds.
    pub fn node_count(&self) -> usize {
        self.tree_segment_size
            .checked_div(self.node_record_size)
            .unwrap_or(0) as usize
    }
}

/// One decoded 44-byte entry of the tree segment.
///
/// The record order in the tree segment is significant (it encodes the
/// nesting of the container hierarchy), so records are always kept in the
/// order they were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    /// Opaque leading field, passed through unchanged.
    pub unknown0: u32,
    /// Byte offset of this node's name inside the string segment.
    pub name_offset: u32,
    /// Node kind bitfield. Preserved, not interpreted.
    pub flags: u32,
    /// Payload offset relative to the start of the data segment.
    pub data_offset: u32,
    /// Payload length in bytes. Already checked against its duplicate field.
    pub size: u32,
}

/// A node record paired with its resolved name.
///
/// Owns its name, so it outlives both the decode buffers and the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub record: NodeRecord,
    pub name: String,
}

impl From<Entry> for (NodeRecord, String) {
    fn from(entry: Entry) -> Self {
        (entry.record, entry.name)
    }
}

/// The contiguous regions of a container, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Tree,
    String,
    Data,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Segment::Tree => write!(f, "tree"),
            Segment::String => write!(f, "string"),
            Segment::Data => write!(f, "data"),
        }
    }
}
