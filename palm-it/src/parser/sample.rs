//! Sample header decoding

use crate::error::ItError;
use crate::module::ItSample;
use crate::SAMPLE_MAGIC;

use super::helpers::{read_bytes, read_string, read_u8, read_u32};

/// Decode an 80-byte IT sample header
///
/// `data` must start at the header's first byte. In a sample record the
/// header is followed by the audio payload; those trailing bytes are left
/// alone here.
pub fn parse_sample(data: &[u8]) -> Result<ItSample, ItError> {
    // Magic "IMPS"
    if read_bytes(data, 0, 4)? != SAMPLE_MAGIC {
        return Err(ItError::InvalidSampleMagic);
    }

    // DOS filename (12 bytes), then one reserved byte
    let filename = read_string(read_bytes(data, 0x04, 12)?);

    // GvL (global volume)
    let global_volume = read_u8(data, 0x11)?;

    // Flg - carried verbatim
    let flags = read_u8(data, 0x12)?;

    // Vol (default volume)
    let default_volume = read_u8(data, 0x13)?;

    // Sample name (26 bytes)
    let name = read_string(read_bytes(data, 0x14, 26)?);

    // Cvt - carried verbatim
    let convert = read_u8(data, 0x2E)?;

    // DfP (default pan)
    let default_pan = read_u8(data, 0x2F)?;

    // Length (4 bytes)
    let length = read_u32(data, 0x30)?;

    // LoopBeg / LoopEnd (4 bytes each)
    let loop_begin = read_u32(data, 0x34)?;
    let loop_end = read_u32(data, 0x38)?;

    // C5Speed (4 bytes)
    let c5_speed = read_u32(data, 0x3C)?;

    // SusLBeg / SusLEnd (4 bytes each)
    let sustain_loop_begin = read_u32(data, 0x40)?;
    let sustain_loop_end = read_u32(data, 0x44)?;

    // SmpPoint (4 bytes) - where the audio payload lands in the assembled file
    let sample_pointer = read_u32(data, 0x48)?;

    // ViS, ViD, ViR, ViT (vibrato)
    let vibrato_speed = read_u8(data, 0x4C)?;
    let vibrato_depth = read_u8(data, 0x4D)?;
    let vibrato_rate = read_u8(data, 0x4E)?;
    let vibrato_type = read_u8(data, 0x4F)?;

    Ok(ItSample {
        filename,
        global_volume,
        flags,
        default_volume,
        name,
        convert,
        default_pan,
        length,
        loop_begin,
        loop_end,
        c5_speed,
        sustain_loop_begin,
        sustain_loop_end,
        sample_pointer,
        vibrato_speed,
        vibrato_depth,
        vibrato_rate,
        vibrato_type,
    })
}
