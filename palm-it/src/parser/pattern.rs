//! Pattern block header decoding

use crate::PATTERN_HEADER_SIZE;
use crate::error::ItError;
use crate::module::ItPatternHeader;

use super::helpers::read_u16;

/// Decode the 8-byte header of a packed pattern block
///
/// The header is a 16-bit packed-data length, a 16-bit row count, and four
/// reserved bytes; the packed data itself starts at offset 8 and is not
/// interpreted here.
pub fn parse_pattern_header(data: &[u8]) -> Result<ItPatternHeader, ItError> {
    if data.len() < PATTERN_HEADER_SIZE {
        return Err(ItError::Truncated {
            needed: PATTERN_HEADER_SIZE,
            available: data.len(),
        });
    }

    let length = read_u16(data, 0)?;
    let rows = read_u16(data, 2)?;
    Ok(ItPatternHeader { length, rows })
}
