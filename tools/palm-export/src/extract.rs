//! Module extraction (PDB -> .it)
//!
//! File-handling wrapper around palm-it's reassembly engine.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use palm_it::{assemble_module_with, parse_project, AssembleOptions};

/// Rebuild an IT module from an in-memory PDB image
///
/// # Arguments
/// * `data` - Raw PDB file bytes
/// * `pattern_records` - Override for the number of pattern records
///   (uses the project header's pattern count if None)
pub fn extract_to_memory(data: &[u8], pattern_records: Option<u16>) -> Result<Vec<u8>> {
    let options = AssembleOptions { pattern_records };
    let module = assemble_module_with(data, &options).context("Failed to assemble IT module")?;
    Ok(module)
}

/// Extract a PDB project database to a standalone .it module file
pub fn extract_file(input: &Path, output: &Path, pattern_records: Option<u16>) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read PDB: {:?}", input))?;

    let module = extract_to_memory(&data, pattern_records)?;

    // Nothing is persisted unless the module parses back; a record placed
    // over the header region leaves it unreadable
    let project = parse_project(&module).context("Assembled module is not a valid IT file")?;

    fs::write(output, &module)
        .with_context(|| format!("Failed to write IT module: {:?}", output))?;

    tracing::info!(
        "Extracted '{}': {} patterns, {} samples, {} bytes",
        project.name,
        project.num_patterns,
        project.num_samples,
        module.len()
    );

    Ok(())
}
