//! Random-access lookup into the string segment.

use encoding_rs::WINDOWS_1252;
use crate::utf::types::error::{FormatError, Result};

/// The string segment: a pool of zero-terminated names addressed by offset.
///
/// Several nodes may share a name offset, and lookups arrive in tree order
/// rather than pool order, so the whole segment is held in memory and every
/// lookup starts from scratch.
#[derive(Debug, Clone)]
pub struct StringTable {
    bytes: Vec<u8>,
}

impl StringTable {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Size of the string segment in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the name starting at `offset`, without its terminator.
    ///
    /// Names are ASCII in practice. Any other byte is decoded as Windows-1252
    /// so that resolution never fails on content.
    pub fn resolve(&self, offset: u32) -> Result<String> {
        let start = offset as usize;
        if start >= self.bytes.len() {
            return Err(FormatError::OutOfBoundsStringOffset {
                offset,
                table_size: self.bytes.len(),
            });
        }

        let tail = &self.bytes[start..];
        let end = tail
            .iter()
            .position(|&byte| byte == 0)
            .ok_or(FormatError::UnterminatedString { offset })?;

        let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(&tail[..end]);
        Ok(decoded.into_owned())
    }
}
