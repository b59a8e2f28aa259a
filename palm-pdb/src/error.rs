//! Error types for PDB container parsing

use std::fmt;

/// Errors that can occur when parsing a PDB database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdbError {
    /// Input ends before a structure the header or directory claims
    Truncated { needed: usize, available: usize },
    /// Two directory entries claim the same data offset
    DuplicateOffset(u32),
    /// Requested record index is not present in the directory
    RecordOutOfRange(usize),
    /// Record extent runs past the end of the input
    RecordOutOfBounds { index: u16, end: u32, available: usize },
}

impl fmt::Display for PdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, available } => {
                write!(f, "Input truncated: need {} bytes, have {}", needed, available)
            }
            Self::DuplicateOffset(offset) => {
                write!(f, "Two records share data offset 0x{:08X}", offset)
            }
            Self::RecordOutOfRange(index) => {
                write!(f, "Record index {} is out of range", index)
            }
            Self::RecordOutOfBounds { index, end, available } => {
                write!(
                    f,
                    "Record {} ends at byte {} but only {} bytes are available",
                    index, end, available
                )
            }
        }
    }
}

impl std::error::Error for PdbError {}
