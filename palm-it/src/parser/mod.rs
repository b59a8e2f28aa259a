//! IT project record parser

use crate::error::ItError;
use crate::module::{ItFlags, ItProject, ItSpecial};
use crate::{
    IT_MAGIC, MAX_INSTRUMENTS, MAX_ORDERS, MAX_PATTERNS, MAX_SAMPLES, PROJECT_HEADER_SIZE,
};

mod helpers;
mod pattern;
mod sample;

use helpers::{read_bytes, read_string, read_u8, read_u16, read_u32};

// Re-export public APIs
pub use pattern::parse_pattern_header;
pub use sample::parse_sample;

/// Decode a project record into an ItProject
///
/// The record starts with the fixed 192-byte header, followed by the order
/// table and the instrument, sample, and pattern offset tables. Bytes past
/// the tables (song message, edit history) are not interpreted; callers that
/// need them keep the raw record around.
///
/// # Arguments
/// * `data` - Raw project record bytes
///
/// # Returns
/// * `Ok(ItProject)` - Decoded header and tables
/// * `Err(ItError)` - Decode error
pub fn parse_project(data: &[u8]) -> Result<ItProject, ItError> {
    if data.len() < PROJECT_HEADER_SIZE {
        return Err(ItError::Truncated {
            needed: PROJECT_HEADER_SIZE,
            available: data.len(),
        });
    }

    // Validate magic "IMPM"
    if &data[0..4] != IT_MAGIC {
        return Err(ItError::InvalidMagic);
    }

    // Song name (26 bytes, null-terminated)
    let name = read_string(read_bytes(data, 0x04, 26)?);

    // PHiligt (2 bytes) - pattern row hilight
    let pattern_hilight = read_u16(data, 0x1E)?;

    // OrdNum (2 bytes)
    let num_orders = read_u16(data, 0x20)?;
    if num_orders > MAX_ORDERS {
        return Err(ItError::TooManyOrders(num_orders));
    }

    // InsNum (2 bytes)
    let num_instruments = read_u16(data, 0x22)?;
    if num_instruments > MAX_INSTRUMENTS {
        return Err(ItError::TooManyInstruments(num_instruments));
    }

    // SmpNum (2 bytes)
    let num_samples = read_u16(data, 0x24)?;
    if num_samples > MAX_SAMPLES {
        return Err(ItError::TooManySamples(num_samples));
    }

    // PatNum (2 bytes)
    let num_patterns = read_u16(data, 0x26)?;
    if num_patterns > MAX_PATTERNS {
        return Err(ItError::TooManyPatterns(num_patterns));
    }

    // Cwt/v (2 bytes) - created with tracker version
    let created_with = read_u16(data, 0x28)?;

    // Cmwt (2 bytes) - compatible with version
    let compatible_with = read_u16(data, 0x2A)?;

    // Flags (2 bytes)
    let flags = ItFlags::from_bits(read_u16(data, 0x2C)?);

    // Special (2 bytes)
    let special = ItSpecial::from_bits(read_u16(data, 0x2E)?);

    // GV, MV, IS, IT, Sep, PWD (1 byte each)
    let global_volume = read_u8(data, 0x30)?;
    let mix_volume = read_u8(data, 0x31)?;
    let initial_speed = read_u8(data, 0x32)?;
    let initial_tempo = read_u8(data, 0x33)?;
    let panning_separation = read_u8(data, 0x34)?;
    let pitch_wheel_depth = read_u8(data, 0x35)?;

    // MsgLgth (2 bytes) and MsgOff (4 bytes), then 4 reserved bytes
    let message_length = read_u16(data, 0x36)?;
    let message_offset = read_u32(data, 0x38)?;

    // Channel volume table (64 bytes)
    let mut channel_volumes = [0u8; 64];
    channel_volumes.copy_from_slice(read_bytes(data, 0x40, 64)?);

    // Channel pan table (64 bytes)
    let mut channel_pans = [0u8; 64];
    channel_pans.copy_from_slice(read_bytes(data, 0x80, 64)?);

    // Order table, then the three offset tables, packed after the header
    let mut pos = PROJECT_HEADER_SIZE;
    let order_table = read_bytes(data, pos, num_orders as usize)?.to_vec();
    pos += num_orders as usize;

    let instrument_offsets = read_offset_table(data, &mut pos, num_instruments)?;
    let sample_offsets = read_offset_table(data, &mut pos, num_samples)?;
    let pattern_offsets = read_offset_table(data, &mut pos, num_patterns)?;

    Ok(ItProject {
        name,
        pattern_hilight,
        num_orders,
        num_instruments,
        num_samples,
        num_patterns,
        created_with,
        compatible_with,
        flags,
        special,
        global_volume,
        mix_volume,
        initial_speed,
        initial_tempo,
        panning_separation,
        pitch_wheel_depth,
        message_length,
        message_offset,
        channel_volumes,
        channel_pans,
        order_table,
        instrument_offsets,
        sample_offsets,
        pattern_offsets,
    })
}

/// Read `count` little-endian u32 file offsets, advancing `pos`
fn read_offset_table(data: &[u8], pos: &mut usize, count: u16) -> Result<Vec<u32>, ItError> {
    let mut offsets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        offsets.push(read_u32(data, *pos)?);
        *pos += 4;
    }
    Ok(offsets)
}
