//! UTF container header parsing and validation.
//!
//! The header is the only part of the format with mixed byte order: the
//! magic is big-endian, every other field is little-endian.

use std::io::{Read, Seek};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::{debug, info, trace};
use crate::utf::types::{
    error::{FormatError, Result},
    models::{ContainerHeader, NODE_RECORD_SIZE, UTF_SIGNATURE, UTF_VERSION},
};
use crate::utf::utils;

/// Parses the container header from the current stream position.
///
/// # Header Structure
/// ```text
/// [ 0] u32 BE  signature "UTF "
/// [ 4] u32 LE  version (0x101)
/// [ 8] u32 LE  tree segment offset
/// [12] u32 LE  tree segment size
/// [16] u32 LE  reserved (0)
/// [20] u32 LE  node record size (44)
/// [24] u32 LE  string segment offset
/// [28] u32 LE  string segment size
/// [32] u32 LE  unpadded string segment size (ignored)
/// [36] u32 LE  data segment offset
/// [40] u32 LE  reserved (0)
/// [44] u32 LE  reserved (0)
/// [48] u32 LE  timestamp (ignored)
/// [52] u32 LE  trailing field (kept, not validated)
/// ```
///
/// Every check runs here, before the caller reads or allocates anything for
/// the segments.
pub fn parse<R: Read + Seek>(file: &mut R) -> Result<ContainerHeader> {
    info!("Parsing UTF header");
    let base = file.stream_position()?;

    let signature = file.read_u32::<BigEndian>()?;
    if signature != UTF_SIGNATURE {
        return Err(FormatError::BadSignature { found: signature });
    }

    let version = file.read_u32::<LittleEndian>()?;
    if version != UTF_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    let tree_segment_offset = file.read_u32::<LittleEndian>()?;
    let tree_segment_size = file.read_u32::<LittleEndian>()?;
    utils::read_reserved(file, "header.reserved0", base + 16)?;

    let node_record_size = file.read_u32::<LittleEndian>()?;
    if node_record_size != NODE_RECORD_SIZE {
        return Err(FormatError::UnsupportedNodeRecordSize(node_record_size));
    }

    let string_segment_offset = file.read_u32::<LittleEndian>()?;
    let string_segment_size = file.read_u32::<LittleEndian>()?;
    let unpadded_string_size = file.read_u32::<LittleEndian>()?;
    let data_segment_offset = file.read_u32::<LittleEndian>()?;
    utils::read_reserved(file, "header.reserved1", base + 40)?;
    utils::read_reserved(file, "header.reserved2", base + 44)?;
    let timestamp = file.read_u32::<LittleEndian>()?;
    let trailing = file.read_u32::<LittleEndian>()?;
    trace!(
        "Ignored header fields: unpadded_string_size={}, timestamp={}",
        unpadded_string_size, timestamp
    );

    debug!(
        "Segments: tree={}+{}, string={}+{}, data={}",
        tree_segment_offset, tree_segment_size,
        string_segment_offset, string_segment_size,
        data_segment_offset
    );

    Ok(ContainerHeader {
        signature,
        version,
        tree_segment_offset,
        tree_segment_size,
        node_record_size,
        string_segment_offset,
        string_segment_size,
        data_segment_offset,
        trailing,
    })
}
