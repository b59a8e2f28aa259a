//! Error types for IT project decoding and module reassembly

use std::fmt;

use palm_pdb::PdbError;

/// Errors that can occur when decoding IT structures or reassembling a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItError {
    /// Input ends before the structure being read
    Truncated { needed: usize, available: usize },
    /// Invalid project magic bytes (expected "IMPM")
    InvalidMagic,
    /// Invalid sample magic bytes (expected "IMPS")
    InvalidSampleMagic,
    /// Too many orders (max 256)
    TooManyOrders(u16),
    /// Too many instruments (max 99)
    TooManyInstruments(u16),
    /// Too many samples (max 99)
    TooManySamples(u16),
    /// Too many patterns (max 256)
    TooManyPatterns(u16),
    /// Header counts require more records than the database holds
    InconsistentCounts { required: usize, present: usize },
    /// Pattern records were requested but the header has no pattern offsets
    MissingPatternOffset,
    /// Container-level failure
    Pdb(PdbError),
}

impl fmt::Display for ItError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, available } => {
                write!(f, "Input truncated: need {} bytes, have {}", needed, available)
            }
            Self::InvalidMagic => write!(f, "Invalid magic bytes (expected 'IMPM')"),
            Self::InvalidSampleMagic => write!(f, "Invalid sample magic bytes (expected 'IMPS')"),
            Self::TooManyOrders(n) => write!(f, "Too many orders: {} (max 256)", n),
            Self::TooManyInstruments(n) => write!(f, "Too many instruments: {} (max 99)", n),
            Self::TooManySamples(n) => write!(f, "Too many samples: {} (max 99)", n),
            Self::TooManyPatterns(n) => write!(f, "Too many patterns: {} (max 256)", n),
            Self::InconsistentCounts { required, present } => {
                write!(
                    f,
                    "Project layout needs {} records but the database has {}",
                    required, present
                )
            }
            Self::MissingPatternOffset => {
                write!(f, "Pattern records present but no pattern offset to place them at")
            }
            Self::Pdb(e) => write!(f, "PDB container error: {}", e),
        }
    }
}

impl std::error::Error for ItError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pdb(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PdbError> for ItError {
    fn from(err: PdbError) -> Self {
        Self::Pdb(err)
    }
}
