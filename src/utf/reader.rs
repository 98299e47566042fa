use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Mutex;
use log::{debug, info};

use super::decoder;
use super::types::error::{FormatError, Result};
use super::types::models::{ContainerHeader, Entry};

/// The main reader for UTF container files.
///
/// Decodes and validates the listing once, up front, then keeps the source
/// open so payloads can be fetched from the data segment on demand.
#[derive(Debug)]
pub struct UtfReader<R = File> {
    source: Mutex<R>,
    /// Length of the source, taken once at open.
    source_size: u64,
    header: ContainerHeader,
    entries: Vec<Entry>,
}

impl UtfReader<File> {
    /// Open and decode a UTF container from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - Header is invalid or unsupported
    /// - Segments are not contiguous
    /// - Any node record or name fails validation
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening UTF file: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> UtfReader<R> {
    /// Decode a container from any seekable source, starting at its current position.
    pub fn from_reader(mut source: R) -> Result<Self> {
        let container = decoder::decode_container(&mut source)?;
        let source_size = source.seek(SeekFrom::End(0))?;
        Ok(Self {
            source: Mutex::new(source),
            source_size,
            header: container.header,
            entries: container.entries,
        })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// All entries, in tree-segment order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total size of the source in bytes.
    pub fn source_size(&self) -> u64 {
        self.source_size
    }

    /// Returns the first entry with the given name, in tree order.
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Reads the raw payload bytes of an entry from the data segment.
    ///
    /// Entries with a size of zero (such as grouping nodes) yield an empty
    /// buffer without touching the source.
    pub fn read_payload(&self, entry: &Entry) -> Result<Vec<u8>> {
        let record = &entry.record;
        if record.size == 0 {
            return Ok(Vec::new());
        }

        let start = u64::from(self.header.data_segment_offset) + u64::from(record.data_offset);
        let end = start + u64::from(record.size);

        if end > self.source_size {
            return Err(FormatError::PayloadOutOfBounds { start, end, file_size: self.source_size });
        }

        let mut source = self.source.lock().map_err(|_| FormatError::LockPoisoned)?;
        debug!("Reading payload of '{}': {} bytes at offset {}", entry.name, record.size, start);
        source.seek(SeekFrom::Start(start))?;
        let mut payload = vec![0u8; record.size as usize];
        source.read_exact(&mut payload)?;
        Ok(payload)
    }

    /// Consumes the reader and returns the underlying source.
    pub fn into_inner(self) -> Result<R> {
        self.source.into_inner().map_err(|_| FormatError::LockPoisoned)
    }
}
