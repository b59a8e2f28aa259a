//! Database inspection
//!
//! Lists the record directory and the project details without extracting.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use palm_it::{parse_pattern_header, parse_project, parse_sample};
use palm_pdb::parse_pdb;

/// Print a summary of a PDB project database
pub fn print_info(input: &Path) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read PDB: {:?}", input))?;
    let db = parse_pdb(&data).with_context(|| format!("Failed to parse PDB: {:?}", input))?;

    tracing::info!(
        "Database '{}' (type {}, creator {}): {} records",
        db.header.name,
        db.header.type_str(),
        db.header.creator_str(),
        db.record_count()
    );

    for (i, record) in db.records.iter().enumerate() {
        tracing::info!(
            "  [{}] offset 0x{:06X}, {} bytes, id 0x{:06X}, attrs 0x{:02X}",
            i,
            record.offset,
            record.len(),
            record.unique_id,
            record.attributes.bits()
        );
    }

    let project_bytes = db
        .record_bytes(&data, 0)
        .context("Database has no project record")?;
    let project = parse_project(project_bytes)?;

    tracing::info!("Project '{}'", project.name);
    tracing::info!(
        "  created with {}, compatible with {}",
        project.created_with_str(),
        project.compatible_with_str()
    );
    tracing::info!(
        "  {} orders, {} instruments, {} samples, {} patterns",
        project.num_orders,
        project.num_instruments,
        project.num_samples,
        project.num_patterns
    );
    tracing::info!(
        "  speed {}, tempo {}, {}",
        project.initial_speed,
        project.initial_tempo,
        if project.is_stereo() { "stereo" } else { "mono" }
    );

    // Pattern records follow the project record
    for i in 0..project.num_patterns as usize {
        let bytes = db.record_bytes(&data, 1 + i)?;
        let pattern = parse_pattern_header(bytes)?;
        tracing::info!(
            "  pattern [{}]: {} rows, {} packed bytes",
            i,
            pattern.rows,
            pattern.length
        );
    }

    // Sample records sit after the pattern records
    let first_sample = 1 + project.num_patterns as usize;
    for i in 0..project.num_samples as usize {
        let bytes = db.record_bytes(&data, first_sample + i)?;
        let sample = parse_sample(bytes)?;
        tracing::info!(
            "  sample [{}] '{}': {} frames at {} Hz -> 0x{:06X}",
            i,
            sample.name,
            sample.length,
            sample.c5_speed,
            sample.sample_pointer
        );
    }

    Ok(())
}
