//! Core UTF container reader module

pub mod decoder;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use decoder::{decode, decode_bytes, decode_container, iter_entries, Container};
pub use iter::EntryIterator;
pub use reader::UtfReader;
pub use types::error::{FormatError, Result};
pub use types::models::{ContainerHeader, Entry, NodeRecord, Segment};
