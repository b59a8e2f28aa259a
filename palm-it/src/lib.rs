//! Palm-IT: Impulse Tracker project decoding and module reassembly for Palmtracker
//!
//! The Palm editor keeps a song as an IT project chopped into PDB records:
//! the project record (header, layout tables, song message), one record per
//! packed pattern, and one record per sample. A desktop IT file is the same
//! data laid out sparsely at the file offsets the project's tables name.
//! This crate decodes the project and sample structures and reassembles the
//! records into a standalone `.it` module playable in any IT-aware tracker.
//!
//! Pattern data and sample audio are moved around as opaque byte blocks;
//! nothing here decodes notes or PCM.
//!
//! # Usage
//!
//! ```ignore
//! use palm_it::assemble_module;
//!
//! let pdb = std::fs::read("song.pdb").unwrap();
//! let module = assemble_module(&pdb).unwrap();
//! std::fs::write("song.it", &module).unwrap();
//! ```
//!
//! # Format Reference
//!
//! - Impulse Tracker Technical Specification (ITTECH.TXT)
//! - <https://github.com/schismtracker/schismtracker/wiki/ITTECH.TXT>

mod assembler;
mod error;
mod module;
mod parser;

pub use assembler::{
    AssembleOptions, SparseBuffer, assemble_from_database, assemble_module, assemble_module_with,
};
pub use error::ItError;
pub use module::{ItFlags, ItPatternHeader, ItProject, ItSample, ItSpecial};
pub use parser::{parse_pattern_header, parse_project, parse_sample};

// =============================================================================
// Constants
// =============================================================================

/// IT format magic string "IMPM"
pub const IT_MAGIC: &[u8; 4] = b"IMPM";

/// Sample magic string "IMPS"
pub const SAMPLE_MAGIC: &[u8; 4] = b"IMPS";

/// Size of the fixed project header in bytes
pub const PROJECT_HEADER_SIZE: usize = 0xC0;

/// Size of a sample header in bytes
pub const SAMPLE_HEADER_SIZE: usize = 0x50;

/// Size of a pattern block header in bytes
pub const PATTERN_HEADER_SIZE: usize = 8;

/// Maximum orders in an IT file
pub const MAX_ORDERS: u16 = 256;

/// Maximum instruments in an IT file
pub const MAX_INSTRUMENTS: u16 = 99;

/// Maximum samples in an IT file
pub const MAX_SAMPLES: u16 = 99;

/// Maximum patterns in an IT file
pub const MAX_PATTERNS: u16 = 256;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(IT_MAGIC.len(), 4);
        assert_eq!(SAMPLE_MAGIC.len(), 4);
        assert_eq!(PROJECT_HEADER_SIZE, 192);
        assert_eq!(SAMPLE_HEADER_SIZE, 80);
        assert!(MAX_SAMPLES <= 99);
        assert!(MAX_PATTERNS <= 256);
    }
}
