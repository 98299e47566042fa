//! Node table decoding.
//!
//! The tree segment is a flat array of fixed-size records. Each one names a
//! node (by offset into the string segment) and locates its payload in the
//! data segment.

use byteorder::{LittleEndian, ReadBytesExt};
use log::trace;
use crate::utf::types::{
    error::{FormatError, Result},
    models::{ContainerHeader, NodeRecord, NODE_RECORD_SIZE},
};
use crate::utf::utils;

/// Computes the number of records in the tree segment.
///
/// A size that is not a whole multiple of the record size is rejected
/// instead of silently dropping the partial record.
pub fn node_count(header: &ContainerHeader) -> Result<usize> {
    if header.node_record_size != NODE_RECORD_SIZE {
        return Err(FormatError::UnsupportedNodeRecordSize(header.node_record_size));
    }
    if header.tree_segment_size % header.node_record_size != 0 {
        return Err(FormatError::TruncatedNodeTable {
            tree_size: header.tree_segment_size,
            record_size: header.node_record_size,
        });
    }
    Ok(header.node_count())
}

/// Decodes one 44-byte record and advances the slice past it.
///
/// # Record Structure
/// ```text
/// [ 0] u32 LE  unknown0
/// [ 4] u32 LE  name offset (into string segment)
/// [ 8] u32 LE  flags
/// [12] u32 LE  reserved (0)
/// [16] u32 LE  data offset (relative to data segment)
/// [20] u32 LE  padded size (ignored)
/// [24] u32 LE  size
/// [28] u32 LE  size, repeated
/// [32] 12 bytes timestamps (ignored)
/// ```
///
/// `record_offset` is the absolute position of the record in the source and
/// only feeds error reporting.
pub fn parse_record(reader: &mut &[u8], index: usize, record_offset: u64) -> Result<NodeRecord> {
    let unknown0 = reader.read_u32::<LittleEndian>()?;
    let name_offset = reader.read_u32::<LittleEndian>()?;
    let flags = reader.read_u32::<LittleEndian>()?;
    utils::read_reserved(reader, "node.reserved", record_offset + 12)?;
    let data_offset = reader.read_u32::<LittleEndian>()?;
    utils::skip_bytes(reader, 4)?;
    let size = reader.read_u32::<LittleEndian>()?;
    let size2 = reader.read_u32::<LittleEndian>()?;
    utils::skip_bytes(reader, 12)?;

    if size != size2 {
        return Err(FormatError::InconsistentSizeFields {
            index,
            offset: record_offset,
            size,
            size2,
        });
    }

    trace!(
        "Node {}: name_offset={}, flags={:#x}, data_offset={}, size={}",
        index, name_offset, flags, data_offset, size
    );

    Ok(NodeRecord {
        unknown0,
        name_offset,
        flags,
        data_offset,
        size,
    })
}
