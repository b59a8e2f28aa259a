//! Helper functions for reading binary data

use crate::error::ItError;

/// Read a single byte at `pos`
pub(crate) fn read_u8(data: &[u8], pos: usize) -> Result<u8, ItError> {
    if pos >= data.len() {
        return Err(ItError::Truncated {
            needed: pos + 1,
            available: data.len(),
        });
    }
    Ok(data[pos])
}

/// Read a 16-bit little-endian integer at `pos`
pub(crate) fn read_u16(data: &[u8], pos: usize) -> Result<u16, ItError> {
    if pos + 2 > data.len() {
        return Err(ItError::Truncated {
            needed: pos + 2,
            available: data.len(),
        });
    }
    Ok(u16::from_le_bytes([data[pos], data[pos + 1]]))
}

/// Read a 32-bit little-endian integer at `pos`
pub(crate) fn read_u32(data: &[u8], pos: usize) -> Result<u32, ItError> {
    if pos + 4 > data.len() {
        return Err(ItError::Truncated {
            needed: pos + 4,
            available: data.len(),
        });
    }
    Ok(u32::from_le_bytes([
        data[pos],
        data[pos + 1],
        data[pos + 2],
        data[pos + 3],
    ]))
}

/// Borrow `len` bytes starting at `pos`
pub(crate) fn read_bytes(data: &[u8], pos: usize, len: usize) -> Result<&[u8], ItError> {
    if pos + len > data.len() {
        return Err(ItError::Truncated {
            needed: pos + len,
            available: data.len(),
        });
    }
    Ok(&data[pos..pos + len])
}

/// Read a null-terminated or fixed-length string
pub(crate) fn read_string(bytes: &[u8]) -> String {
    // Find null terminator or end of slice
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    // Trim trailing spaces and convert
    String::from_utf8_lossy(&bytes[..len])
        .trim_end()
        .to_string()
}
