//! # utf-reader
//!
//! A reader for segmented UTF container files: a fixed header, a tree
//! segment of 44-byte node records, a string segment of zero-terminated
//! names and a data segment of raw payloads.
//!
//! **Note:** Node `flags` are decoded but not interpreted, so the listing is
//! flat; rebuilding the directory hierarchy is not implemented.
pub mod utf;

// Re-export the main types for convenience
pub use utf::{
    decode,
    decode_bytes,
    decode_container,
    iter_entries,
    Container,
    EntryIterator,
    FormatError,
    Result,
    UtfReader,
    format::strings::StringTable,
    types::models::{
        ContainerHeader,
        Entry,
        NodeRecord,
        Segment,
        HEADER_SIZE,
        NODE_RECORD_SIZE,
        UTF_SIGNATURE,
        UTF_VERSION,
    },
};
