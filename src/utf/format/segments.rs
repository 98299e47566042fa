//! Sequential extraction of the tree and string segments.
//!
//! Segments are laid out back to back (header, tree, string, data) with no
//! gaps. Instead of seeking to each declared offset, the extractor checks
//! that the cursor already sits there, which rejects reordered or padded
//! layouts.

use std::io::{self, Read, Seek};
use log::debug;
use crate::utf::types::{
    error::{FormatError, Result},
    models::{ContainerHeader, Segment},
};

/// The two segments the decoder materialises, owned for one decode call.
#[derive(Debug)]
pub struct Segments {
    pub tree: Vec<u8>,
    pub strings: Vec<u8>,
}

/// Reads the tree and string segments that follow the header.
///
/// The stream must be positioned directly after the header. On success the
/// stream is positioned at the start of the data segment, which is left
/// unread.
pub fn extract<R: Read + Seek>(file: &mut R, header: &ContainerHeader) -> Result<Segments> {
    let tree = read_segment(file, Segment::Tree, header.tree_segment_offset, header.tree_segment_size)?;
    let strings = read_segment(file, Segment::String, header.string_segment_offset, header.string_segment_size)?;
    expect_position(file, Segment::Data, header.data_segment_offset)?;
    Ok(Segments { tree, strings })
}

fn read_segment<R: Read + Seek>(file: &mut R, segment: Segment, offset: u32, size: u32) -> Result<Vec<u8>> {
    expect_position(file, segment, offset)?;
    debug!("Reading {} segment: {} bytes at offset {}", segment, size, offset);
    // Grows with the data actually present, so a bogus size cannot force a huge allocation.
    let mut buffer = Vec::new();
    file.by_ref().take(u64::from(size)).read_to_end(&mut buffer)?;
    if buffer.len() != size as usize {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{} segment truncated: expected {} bytes, got {}", segment, size, buffer.len()),
        )
        .into());
    }
    Ok(buffer)
}

fn expect_position<R: Seek>(file: &mut R, segment: Segment, declared: u32) -> Result<()> {
    let actual = file.stream_position()?;
    if actual != u64::from(declared) {
        return Err(FormatError::MisalignedSegment {
            segment,
            expected: u64::from(declared),
            actual,
        });
    }
    Ok(())
}
