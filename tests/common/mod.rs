//! Synthetic UTF container builder shared by the integration tests.
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::{self, Cursor, Read, Seek, SeekFrom};

pub const HEADER_LEN: u32 = 56;
pub const RECORD_LEN: u32 = 44;

/// Raw node record fields, written verbatim.
#[derive(Debug, Clone, Copy)]
pub struct RawNode {
    pub unknown0: u32,
    pub name_offset: u32,
    pub flags: u32,
    pub reserved: u32,
    pub data_offset: u32,
    pub size: u32,
    pub size2: u32,
}

impl RawNode {
    pub fn new(name_offset: u32, data_offset: u32, size: u32) -> Self {
        Self {
            unknown0: 0,
            name_offset,
            flags: 0x80,
            reserved: 0,
            data_offset,
            size,
            size2: size,
        }
    }
}

/// Builds container bytes with contiguous segments by default. Every field
/// can be overridden to produce malformed input.
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    pub signature: [u8; 4],
    pub version: u32,
    pub node_record_size: u32,
    pub header_reserved: [u32; 3],
    pub trailing: u32,
    pub nodes: Vec<RawNode>,
    /// Extra bytes appended to the tree segment after the records.
    pub tree_tail: Vec<u8>,
    pub strings: Vec<u8>,
    pub data: Vec<u8>,
    pub tree_offset: Option<u32>,
    pub string_offset: Option<u32>,
    pub data_offset: Option<u32>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            signature: *b"UTF ",
            version: 0x101,
            node_record_size: RECORD_LEN,
            header_reserved: [0; 3],
            trailing: 0,
            nodes: Vec::new(),
            tree_tail: Vec::new(),
            strings: Vec::new(),
            data: Vec::new(),
            tree_offset: None,
            string_offset: None,
            data_offset: None,
        }
    }

    /// One node per `(name, payload)` pair, names and payloads packed in order.
    pub fn with_entries(entries: &[(&str, &[u8])]) -> Self {
        let mut builder = Self::new();
        for (name, payload) in entries {
            let name_offset = builder.strings.len() as u32;
            builder.strings.extend_from_slice(name.as_bytes());
            builder.strings.push(0);

            let data_offset = builder.data.len() as u32;
            builder.data.extend_from_slice(payload);
            builder.nodes.push(RawNode::new(name_offset, data_offset, payload.len() as u32));
        }
        builder
    }

    pub fn tree_size(&self) -> u32 {
        self.nodes.len() as u32 * RECORD_LEN + self.tree_tail.len() as u32
    }

    pub fn build(&self) -> Vec<u8> {
        let tree_size = self.tree_size();
        let string_size = self.strings.len() as u32;
        let tree_offset = self.tree_offset.unwrap_or(HEADER_LEN);
        let string_offset = self.string_offset.unwrap_or(HEADER_LEN + tree_size);
        let data_offset = self.data_offset.unwrap_or(HEADER_LEN + tree_size + string_size);

        let mut out = Vec::new();
        out.write_u32::<BigEndian>(u32::from_be_bytes(self.signature)).unwrap();
        out.write_u32::<LittleEndian>(self.version).unwrap();
        out.write_u32::<LittleEndian>(tree_offset).unwrap();
        out.write_u32::<LittleEndian>(tree_size).unwrap();
        out.write_u32::<LittleEndian>(self.header_reserved[0]).unwrap();
        out.write_u32::<LittleEndian>(self.node_record_size).unwrap();
        out.write_u32::<LittleEndian>(string_offset).unwrap();
        out.write_u32::<LittleEndian>(string_size).unwrap();
        out.write_u32::<LittleEndian>(string_size).unwrap();
        out.write_u32::<LittleEndian>(data_offset).unwrap();
        out.write_u32::<LittleEndian>(self.header_reserved[1]).unwrap();
        out.write_u32::<LittleEndian>(self.header_reserved[2]).unwrap();
        out.write_u32::<LittleEndian>(0x4A1B_2C3D).unwrap();
        out.write_u32::<LittleEndian>(self.trailing).unwrap();
        assert_eq!(out.len() as u32, HEADER_LEN);

        for node in &self.nodes {
            out.write_u32::<LittleEndian>(node.unknown0).unwrap();
            out.write_u32::<LittleEndian>(node.name_offset).unwrap();
            out.write_u32::<LittleEndian>(node.flags).unwrap();
            out.write_u32::<LittleEndian>(node.reserved).unwrap();
            out.write_u32::<LittleEndian>(node.data_offset).unwrap();
            out.write_u32::<LittleEndian>(node.size.next_multiple_of(4)).unwrap();
            out.write_u32::<LittleEndian>(node.size).unwrap();
            out.write_u32::<LittleEndian>(node.size2).unwrap();
            out.extend_from_slice(&[0xEE; 12]);
        }
        out.extend_from_slice(&self.tree_tail);
        out.extend_from_slice(&self.strings);
        out.extend_from_slice(&self.data);
        out
    }
}

/// A source that serves only the header and fails any read beyond it, to
/// prove that header validation happens before segments are touched.
pub struct HeaderOnly {
    inner: Cursor<Vec<u8>>,
}

impl HeaderOnly {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { inner: Cursor::new(bytes) }
    }
}

impl Read for HeaderOnly {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let pos = self.inner.position();
        if pos >= u64::from(HEADER_LEN) {
            return Err(io::Error::other("segment read attempted"));
        }
        let allowed = (u64::from(HEADER_LEN) - pos).min(buf.len() as u64) as usize;
        self.inner.read(&mut buf[..allowed])
    }
}

impl Seek for HeaderOnly {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
