//! Iterator over the entries of an extracted container.
//!
//! [`EntryIterator`] owns the tree segment and the string table and decodes
//! one record per step, resolving its name as it goes. Both buffers are
//! dropped with the iterator; the entries it yields own their data.

use log::trace;
use super::format::{nodes, strings::StringTable};
use super::types::error::Result;
use super::types::models::{ContainerHeader, Entry};

/// Yields `Result<Entry>` in tree-segment order.
///
/// Stops after the first error: a failed record means the remaining bytes
/// cannot be trusted.
#[derive(Debug)]
pub struct EntryIterator {
    header: ContainerHeader,
    tree: Vec<u8>,
    strings: StringTable,
    index: usize,
    remaining: usize,
}

impl EntryIterator {
    /// Creates an iterator over `tree`, which must hold exactly the tree
    /// segment described by `header`.
    pub fn new(header: ContainerHeader, tree: Vec<u8>, strings: StringTable) -> Result<Self> {
        let remaining = nodes::node_count(&header)?;
        Ok(Self {
            header,
            tree,
            strings,
            index: 0,
            remaining,
        })
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    fn next_entry(&mut self) -> Result<Entry> {
        let record_size = self.header.node_record_size as usize;
        let start = self.index * record_size;
        let record_offset = u64::from(self.header.tree_segment_offset) + start as u64;

        let mut reader = self.tree.get(start..).unwrap_or_default();
        let record = nodes::parse_record(&mut reader, self.index, record_offset)?;
        let name = self.strings.resolve(record.name_offset)?;
        trace!("Entry {}: '{}'", self.index, name);
        Ok(Entry { record, name })
    }
}

impl Iterator for EntryIterator {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.next_entry();
        self.index += 1;
        self.remaining = match result {
            Ok(_) => self.remaining - 1,
            Err(_) => 0,
        };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
