//! Custom error types for the utf-reader crate.

use thiserror::Error;

use super::models::Segment;

/// The primary error type for all operations in this crate.
///
/// Every format variant is fatal for the decode that raised it: once an
/// invariant fails, nothing after that point in the stream can be trusted.
#[derive(Debug, Error)]
pub enum FormatError {
    /// An error originating from I/O operations, including short reads.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header magic is not `"UTF "`.
    #[error("Bad signature: expected {expected:#010x} (\"UTF \"), found {found:#010x}", expected = super::models::UTF_SIGNATURE)]
    BadSignature { found: u32 },

    /// The header declares a format version other than `0x101`.
    #[error("Unsupported UTF version: {0:#x}. Only version 0x101 is supported.")]
    UnsupportedVersion(u32),

    /// A field that must be zero holds some other value.
    #[error("Unexpected value {value:#x} in reserved field '{field}' at byte offset {offset}")]
    UnexpectedReservedValue {
        field: &'static str,
        offset: u64,
        value: u32,
    },

    /// The header declares a node record size other than 44 bytes.
    #[error("Unsupported node record size: {0} bytes (expected 44)")]
    UnsupportedNodeRecordSize(u32),

    /// A segment does not start where the read cursor is.
    #[error("Misaligned {segment} segment: header declares offset {expected}, but stream is at {actual}")]
    MisalignedSegment {
        segment: Segment,
        expected: u64,
        actual: u64,
    },

    /// The tree segment size is not a whole number of node records.
    #[error("Truncated node table: tree segment size {tree_size} is not a multiple of the {record_size}-byte record size")]
    TruncatedNodeTable { tree_size: u32, record_size: u32 },

    /// The redundant size fields of a node record disagree.
    #[error("Inconsistent size fields in node {index} (tree offset {offset}): size={size}, size2={size2}")]
    InconsistentSizeFields {
        index: usize,
        offset: u64,
        size: u32,
        size2: u32,
    },

    /// A name offset points at or past the end of the string segment.
    #[error("String offset {offset} is out of bounds for a {table_size}-byte string segment")]
    OutOfBoundsStringOffset { offset: u32, table_size: usize },

    /// No zero terminator was found between a name offset and the end of the string segment.
    #[error("Unterminated string at string segment offset {offset}")]
    UnterminatedString { offset: u32 },

    /// A node's payload range extends past the end of the source.
    #[error("Payload range {start}..{end} exceeds source size {file_size}")]
    PayloadOutOfBounds { start: u64, end: u64, file_size: u64 },

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `FormatError` type.
pub type Result<T> = std::result::Result<T, FormatError>;
