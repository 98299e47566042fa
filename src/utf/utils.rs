//! Low-level byte reading utilities

use std::io::{self, Read};
use byteorder::{LittleEndian, ReadBytesExt};
use super::types::error::{FormatError, Result};

/// Read a little-endian u32 that the format requires to be zero.
///
/// `offset` is the position of the field, reported if the check fails.
pub fn read_reserved(reader: &mut impl Read, field: &'static str, offset: u64) -> Result<()> {
    let value = reader.read_u32::<LittleEndian>()?;
    expect_zero(field, value, offset)
}

/// Fail with `UnexpectedReservedValue` unless `value` is zero.
pub fn expect_zero(field: &'static str, value: u32, offset: u64) -> Result<()> {
    if value != 0 {
        return Err(FormatError::UnexpectedReservedValue { field, offset, value });
    }
    Ok(())
}

/// Advance a byte slice past `count` bytes without interpreting them.
pub fn skip_bytes(reader: &mut &[u8], count: usize) -> Result<()> {
    if reader.len() < count {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("cannot skip {} bytes, only {} remain", count, reader.len()),
        )
        .into());
    }
    *reader = &reader[count..];
    Ok(())
}
