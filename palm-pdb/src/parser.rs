//! PDB file parser

use crate::database::{PdbAttrs, PdbDatabase, PdbHeader, PdbRecord};
use crate::error::PdbError;
use crate::{HEADER_SIZE, NAME_SIZE, RECORD_ENTRY_SIZE};

/// Parse a PDB file image into a database
///
/// Parses the header and record directory, then resolves record extents so
/// each record's payload can be borrowed out of `data`.
///
/// # Arguments
/// * `data` - Raw PDB file bytes
///
/// # Returns
/// * `Ok(PdbDatabase)` - Parsed database with records sorted by offset
/// * `Err(PdbError)` - Parse error
pub fn parse_pdb(data: &[u8]) -> Result<PdbDatabase, PdbError> {
    let header = parse_header(data)?;
    let mut records = parse_record_directory(data, header.num_records)?;
    compute_extents(&mut records, data.len())?;
    Ok(PdbDatabase { header, records })
}

/// Parse the fixed 78-byte big-endian PDB header
pub fn parse_header(data: &[u8]) -> Result<PdbHeader, PdbError> {
    if data.len() < HEADER_SIZE {
        return Err(PdbError::Truncated {
            needed: HEADER_SIZE,
            available: data.len(),
        });
    }

    let name = read_string(&data[0..NAME_SIZE]);

    // Only the low byte of the attribute word carries record-style flags
    let attributes = PdbAttrs::from_bits(read_u16_be(data, 0x20) as u8);
    let version = read_u16_be(data, 0x22);

    let creation_time = read_u32_be(data, 0x24);
    let modification_time = read_u32_be(data, 0x28);
    let backup_time = read_u32_be(data, 0x2C);
    let modification_number = read_u32_be(data, 0x30);
    let app_info = read_u32_be(data, 0x34);
    let sort_info = read_u32_be(data, 0x38);

    let mut type_code = [0u8; 4];
    type_code.copy_from_slice(&data[0x3C..0x40]);
    let mut creator = [0u8; 4];
    creator.copy_from_slice(&data[0x40..0x44]);

    let unique_id_seed = read_u32_be(data, 0x44);
    let next_record_list = read_u32_be(data, 0x48);
    let num_records = read_u16_be(data, 0x4C);

    Ok(PdbHeader {
        name,
        attributes,
        version,
        creation_time,
        modification_time,
        backup_time,
        modification_number,
        app_info,
        sort_info,
        type_code,
        creator,
        unique_id_seed,
        next_record_list,
        num_records,
    })
}

/// Parse the record directory that follows the header
///
/// Each entry is 8 bytes: a 32-bit data offset, an attribute byte, and a
/// 24-bit unique id. Extents are not known yet at this point; `end` is left
/// at zero until [`compute_extents`] fills it in.
pub fn parse_record_directory(data: &[u8], num_records: u16) -> Result<Vec<PdbRecord>, PdbError> {
    let needed = HEADER_SIZE + num_records as usize * RECORD_ENTRY_SIZE;
    if data.len() < needed {
        return Err(PdbError::Truncated {
            needed,
            available: data.len(),
        });
    }

    let mut records = Vec::with_capacity(num_records as usize);
    for index in 0..num_records {
        let base = HEADER_SIZE + index as usize * RECORD_ENTRY_SIZE;
        let offset = read_u32_be(data, base);
        let attributes = PdbAttrs::from_bits(data[base + 4]);
        let unique_id = u32::from_be_bytes([0, data[base + 5], data[base + 6], data[base + 7]]);
        records.push(PdbRecord {
            index,
            offset,
            end: 0,
            attributes,
            unique_id,
        });
    }

    Ok(records)
}

/// Resolve record extents from the directory's start offsets
///
/// Sorts the records by ascending offset; each record then ends where the
/// next one starts, and the last record runs to `total_len`. Duplicate
/// offsets cannot form disjoint extents and are rejected, as are offsets
/// past the end of the input.
pub fn compute_extents(records: &mut [PdbRecord], total_len: usize) -> Result<(), PdbError> {
    records.sort_by_key(|r| r.offset);

    for pair in records.windows(2) {
        if pair[0].offset == pair[1].offset {
            return Err(PdbError::DuplicateOffset(pair[0].offset));
        }
    }

    let total = u32::try_from(total_len).unwrap_or(u32::MAX);
    for record in records.iter() {
        if record.offset > total {
            return Err(PdbError::RecordOutOfBounds {
                index: record.index,
                end: record.offset,
                available: total_len,
            });
        }
    }

    // Walk backwards so each record ends where its successor starts
    let mut next_offset = total;
    for record in records.iter_mut().rev() {
        record.end = next_offset;
        next_offset = record.offset;
    }

    Ok(())
}

// =============================================================================
// Helper functions for reading data
// =============================================================================

// Callers bounds-check before indexing; see the length guards above.

fn read_u16_be(data: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([data[pos], data[pos + 1]])
}

fn read_u32_be(data: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Read a null-terminated or fixed-length string
fn read_string(bytes: &[u8]) -> String {
    // Find null terminator or end of slice
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    // Trim trailing spaces and convert
    String::from_utf8_lossy(&bytes[..len])
        .trim_end()
        .to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialize a header with fixed, recognizable field values
    fn build_header(name: &str, num_records: u16) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);

        let mut name_field = [0u8; NAME_SIZE];
        name_field[..name.len()].copy_from_slice(name.as_bytes());
        out.extend_from_slice(&name_field);

        out.extend_from_slice(&0x0008u16.to_be_bytes()); // attributes
        out.extend_from_slice(&0x0102u16.to_be_bytes()); // version
        out.extend_from_slice(&0xD0A1_B2C3u32.to_be_bytes()); // creation time
        out.extend_from_slice(&0xD0A1_B2C4u32.to_be_bytes()); // modification time
        out.extend_from_slice(&0u32.to_be_bytes()); // backup time
        out.extend_from_slice(&7u32.to_be_bytes()); // modification number
        out.extend_from_slice(&0u32.to_be_bytes()); // app info
        out.extend_from_slice(&0u32.to_be_bytes()); // sort info
        out.extend_from_slice(b"TRAK"); // type
        out.extend_from_slice(b"PTrk"); // creator
        out.extend_from_slice(&0x0000_1234u32.to_be_bytes()); // unique id seed
        out.extend_from_slice(&0u32.to_be_bytes()); // next record list
        out.extend_from_slice(&num_records.to_be_bytes());

        assert_eq!(out.len(), HEADER_SIZE);
        out
    }

    fn directory_entry(offset: u32, attrs: u8, unique_id: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_ENTRY_SIZE);
        out.extend_from_slice(&offset.to_be_bytes());
        out.push(attrs);
        out.extend_from_slice(&unique_id.to_be_bytes()[1..]); // 24-bit id
        out
    }

    /// Build a full database image with the payloads packed in directory order
    fn build_database(payloads: &[&[u8]]) -> Vec<u8> {
        let num_records = payloads.len() as u16;
        let mut out = build_header("test-db", num_records);

        let data_start = HEADER_SIZE + payloads.len() * RECORD_ENTRY_SIZE;
        let mut offset = data_start as u32;
        for (i, payload) in payloads.iter().enumerate() {
            out.extend_from_slice(&directory_entry(offset, 0, i as u32 + 1));
            offset += payload.len() as u32;
        }
        for payload in payloads {
            out.extend_from_slice(payload);
        }
        out
    }

    #[test]
    fn test_parse_header_fields() {
        let data = build_header("MySongs", 3);
        let header = parse_header(&data).unwrap();

        assert_eq!(header.name, "MySongs");
        assert!(header.attributes.is_deleted()); // 0x0008
        assert_eq!(header.version, 0x0102);
        assert_eq!(header.creation_time, 0xD0A1_B2C3);
        assert_eq!(header.modification_time, 0xD0A1_B2C4);
        assert_eq!(header.backup_time, 0);
        assert_eq!(header.modification_number, 7);
        assert_eq!(header.app_info, 0);
        assert_eq!(header.sort_info, 0);
        assert_eq!(&header.type_code, b"TRAK");
        assert_eq!(&header.creator, b"PTrk");
        assert_eq!(header.type_str(), "TRAK");
        assert_eq!(header.creator_str(), "PTrk");
        assert_eq!(header.unique_id_seed, 0x1234);
        assert_eq!(header.next_record_list, 0);
        assert_eq!(header.num_records, 3);
    }

    #[test]
    fn test_parse_header_truncated() {
        let data = build_header("short", 0);
        let result = parse_header(&data[..50]);
        assert_eq!(
            result,
            Err(PdbError::Truncated {
                needed: HEADER_SIZE,
                available: 50
            })
        );
    }

    #[test]
    fn test_parse_directory_truncated() {
        // Header claims three records but the directory is cut short
        let mut data = build_header("cut", 3);
        data.extend_from_slice(&directory_entry(100, 0, 1));
        let result = parse_record_directory(&data, 3);
        assert_eq!(
            result,
            Err(PdbError::Truncated {
                needed: HEADER_SIZE + 3 * RECORD_ENTRY_SIZE,
                available: data.len()
            })
        );
    }

    #[test]
    fn test_directory_entry_fields() {
        let mut data = build_header("attrs", 1);
        data.extend_from_slice(&directory_entry(0x0001_0203, 0x0C, 0xABCDEF));
        let records = parse_record_directory(&data, 1).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].offset, 0x0001_0203);
        assert!(records[0].attributes.is_deleted());
        assert!(records[0].attributes.is_archived());
        assert!(!records[0].attributes.is_secret());
        assert_eq!(records[0].unique_id, 0xABCDEF);
    }

    fn record_at(index: u16, offset: u32) -> PdbRecord {
        PdbRecord {
            index,
            offset,
            end: 0,
            attributes: PdbAttrs::empty(),
            unique_id: index as u32,
        }
    }

    #[test]
    fn test_extents_from_unsorted_offsets() {
        let mut records = vec![record_at(0, 10), record_at(1, 50), record_at(2, 30)];
        compute_extents(&mut records, 100).unwrap();

        let offsets: Vec<u32> = records.iter().map(|r| r.offset).collect();
        let ends: Vec<u32> = records.iter().map(|r| r.end).collect();
        assert_eq!(offsets, [10, 30, 50]);
        assert_eq!(ends, [30, 50, 100]);

        // Directory positions ride along with the sort
        let indices: Vec<u16> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, [0, 2, 1]);
    }

    #[test]
    fn test_extents_duplicate_offsets() {
        let mut records = vec![record_at(0, 10), record_at(1, 10)];
        let result = compute_extents(&mut records, 100);
        assert_eq!(result, Err(PdbError::DuplicateOffset(10)));
    }

    #[test]
    fn test_extents_offset_past_end() {
        let mut records = vec![record_at(0, 10), record_at(1, 150)];
        let result = compute_extents(&mut records, 100);
        assert_eq!(
            result,
            Err(PdbError::RecordOutOfBounds {
                index: 1,
                end: 150,
                available: 100
            })
        );
    }

    #[test]
    fn test_parse_pdb_end_to_end() {
        let data = build_database(&[b"first record", b"second", b"third one"]);
        let db = parse_pdb(&data).unwrap();

        assert_eq!(db.header.name, "test-db");
        assert_eq!(db.record_count(), 3);
        assert_eq!(db.record_bytes(&data, 0).unwrap(), b"first record");
        assert_eq!(db.record_bytes(&data, 1).unwrap(), b"second");
        assert_eq!(db.record_bytes(&data, 2).unwrap(), b"third one");

        // Last record runs to the end of the file
        assert_eq!(db.records[2].end as usize, data.len());
    }

    #[test]
    fn test_record_index_out_of_range() {
        let data = build_database(&[b"only"]);
        let db = parse_pdb(&data).unwrap();
        assert_eq!(
            db.record_bytes(&data, 5),
            Err(PdbError::RecordOutOfRange(5))
        );
    }

    #[test]
    fn test_empty_database() {
        let data = build_database(&[]);
        let db = parse_pdb(&data).unwrap();
        assert_eq!(db.record_count(), 0);
        assert_eq!(db.header.num_records, 0);
    }

    #[test]
    fn test_records_sorted_regardless_of_directory_order() {
        // Directory lists the later payload first
        let mut data = build_header("unsorted", 2);
        let data_start = (HEADER_SIZE + 2 * RECORD_ENTRY_SIZE) as u32;
        data.extend_from_slice(&directory_entry(data_start + 4, 0, 1));
        data.extend_from_slice(&directory_entry(data_start, 0, 2));
        data.extend_from_slice(b"abcdWXYZ");

        let db = parse_pdb(&data).unwrap();
        assert_eq!(db.record_bytes(&data, 0).unwrap(), b"abcd");
        assert_eq!(db.record_bytes(&data, 1).unwrap(), b"WXYZ");
        // First in offset order came second in the directory
        assert_eq!(db.records[0].index, 1);
        assert_eq!(db.records[1].index, 0);
    }

    #[test]
    fn test_read_string() {
        assert_eq!(read_string(b"Hello\0World"), "Hello");
        assert_eq!(read_string(b"No null"), "No null");
        assert_eq!(read_string(b"Trailing   "), "Trailing");
        assert_eq!(read_string(b""), "");
    }
}
