//! palm-export library
//!
//! Provides PDB extraction functions for use by other tools.

pub mod extract;
pub mod info;

// Re-export the extraction entry points
pub use extract::{extract_file, extract_to_memory};
