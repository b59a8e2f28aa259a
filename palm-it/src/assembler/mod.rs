//! Reassembly of a standalone IT module from PDB records
//!
//! The Palm editor stores a project as PDB records: record 0 holds the
//! project record (header, tables, song message), the records after it carry
//! one packed pattern each, and the remaining records carry one sample each
//! as an 80-byte header followed by the audio payload. The desktop IT layout
//! is address-based instead: every structure lives at the file offset the
//! project's tables point at, with the sample headers naming where their own
//! payloads go. Reassembly walks the records in order and writes each piece
//! at its table-given address, zero-filling whatever no record claims.

mod buffer;

pub use buffer::SparseBuffer;

use palm_pdb::{PdbDatabase, parse_pdb};

use crate::SAMPLE_HEADER_SIZE;
use crate::error::ItError;
use crate::parser::{parse_project, parse_sample};

/// Options controlling module reassembly
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Number of records after the project record that hold pattern data.
    /// `None` uses the pattern count the project header declares.
    pub pattern_records: Option<u16>,
}

/// Reassemble a standalone IT module from a PDB file image
pub fn assemble_module(data: &[u8]) -> Result<Vec<u8>, ItError> {
    assemble_module_with(data, &AssembleOptions::default())
}

/// Reassemble a standalone IT module with explicit options
pub fn assemble_module_with(data: &[u8], options: &AssembleOptions) -> Result<Vec<u8>, ItError> {
    let db = parse_pdb(data)?;
    assemble_from_database(&db, data, options)
}

/// Reassemble from an already-parsed database
///
/// Lets callers that parsed the container for their own reporting avoid
/// parsing it a second time. `data` must be the same image the database was
/// parsed from.
pub fn assemble_from_database(
    db: &PdbDatabase,
    data: &[u8],
    options: &AssembleOptions,
) -> Result<Vec<u8>, ItError> {
    if db.record_count() == 0 {
        return Err(ItError::InconsistentCounts {
            required: 1,
            present: 0,
        });
    }

    let project_bytes = db.record_bytes(data, 0)?;
    let project = parse_project(project_bytes)?;

    let pattern_records = options.pattern_records.unwrap_or(project.num_patterns) as usize;
    let required = 1 + pattern_records + project.num_samples as usize;
    if db.record_count() < required {
        return Err(ItError::InconsistentCounts {
            required,
            present: db.record_count(),
        });
    }

    let mut out = SparseBuffer::new();

    // The project record is the start of the desktop file, verbatim: header,
    // tables, and whatever trails them (song message, edit history).
    out.write_at(0, project_bytes);

    // Pattern records lay out back to back from the first pattern offset;
    // the spacing of the project's own table entries accounts for their
    // lengths.
    if pattern_records > 0 {
        let first = project
            .pattern_offsets
            .first()
            .copied()
            .ok_or(ItError::MissingPatternOffset)?;
        let mut at = first as usize;
        for ordinal in 1..=pattern_records {
            let bytes = db.record_bytes(data, ordinal)?;
            out.write_at(at, bytes);
            at += bytes.len();
        }
    }

    // Each sample record splits in two: the 80-byte header goes to its slot
    // in the sample offset table, the audio payload to the address the
    // header itself names.
    for (i, &header_offset) in project.sample_offsets.iter().enumerate() {
        let ordinal = 1 + pattern_records + i;
        let bytes = db.record_bytes(data, ordinal)?;
        let sample = parse_sample(bytes)?;
        out.write_at(header_offset as usize, &bytes[..SAMPLE_HEADER_SIZE]);
        out.write_at(sample.sample_pointer as usize, &bytes[SAMPLE_HEADER_SIZE..]);
    }

    Ok(out.into_bytes())
}
