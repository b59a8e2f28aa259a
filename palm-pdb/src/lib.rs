//! Palm-PDB: Palm OS database (PDB) container parser for Palmtracker
//!
//! A PDB file is a flat record container: a fixed 78-byte big-endian header,
//! a directory of 8-byte record entries, and then the record payloads packed
//! back to back. The format stores record start offsets only; each record's
//! length is implied by the offset of the record that follows it (the last
//! record runs to the end of the file).
//!
//! This crate parses the header and directory and resolves those implied
//! extents so callers can borrow individual record payloads out of the raw
//! file image. It does not interpret record contents; that is the job of the
//! format crates layered on top (e.g. `palm-it`).
//!
//! # Usage
//!
//! ```ignore
//! use palm_pdb::parse_pdb;
//!
//! let data = std::fs::read("song.pdb").unwrap();
//! let db = parse_pdb(&data).unwrap();
//!
//! println!("Database: {}", db.header.name);
//! for record in &db.records {
//!     println!("record {} at 0x{:06X}, {} bytes", record.index, record.offset, record.len());
//! }
//! let first = db.record_bytes(&data, 0).unwrap();
//! ```

mod database;
mod error;
mod parser;

pub use database::{PdbAttrs, PdbDatabase, PdbHeader, PdbRecord};
pub use error::PdbError;
pub use parser::{compute_extents, parse_header, parse_pdb, parse_record_directory};

// =============================================================================
// Constants
// =============================================================================

/// Size of the fixed PDB header in bytes; the record directory starts here
pub const HEADER_SIZE: usize = 78;

/// Size of one record directory entry in bytes
pub const RECORD_ENTRY_SIZE: usize = 8;

/// Size of the database name field in bytes
pub const NAME_SIZE: usize = 32;

// =============================================================================
// Tests
// =============================================================================
