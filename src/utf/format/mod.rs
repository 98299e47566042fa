//! File format parsing layer for UTF containers.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw stream I/O and the high-level [`decode`](crate::utf::decoder::decode)
//! entry point and [`UtfReader`](crate::utf::reader::UtfReader).
//!
//! # Module Organization
//!
//! - [`header`]: Parses and validates the fixed header
//! - [`segments`]: Extracts the tree and string segments into owned buffers
//! - [`nodes`]: Decodes the fixed-size node records of the tree segment
//! - [`strings`]: Resolves names by offset into the string segment
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Header         │ ← header::parse()
//! ├─────────────────┤
//! │  Tree Segment   │ ← segments::extract() + nodes::parse_table()
//! │  (44-byte       │
//! │   node records) │
//! ├─────────────────┤
//! │  String Segment │ ← segments::extract() + StringTable::resolve()
//! ├─────────────────┤
//! │  Data Segment   │ ← UtfReader::read_payload()
//! │  (raw payloads) │
//! └─────────────────┘
//! ```

pub mod header;
pub mod nodes;
pub mod segments;
pub mod strings;
