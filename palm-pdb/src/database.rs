//! PDB container data structures

use crate::error::PdbError;

/// Parsed PDB database: the fixed header plus the record directory
#[derive(Debug, Clone)]
pub struct PdbDatabase {
    /// Fixed 78-byte header
    pub header: PdbHeader,
    /// Record directory, sorted by ascending data offset with extents resolved
    pub records: Vec<PdbRecord>,
}

impl PdbDatabase {
    /// Number of records in the directory
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Borrow the payload of the record at `index` out of the file image.
    ///
    /// `index` is the position in the offset-sorted directory, which is how
    /// the records are consumed downstream.
    pub fn record_bytes<'a>(&self, data: &'a [u8], index: usize) -> Result<&'a [u8], PdbError> {
        let record = self
            .records
            .get(index)
            .ok_or(PdbError::RecordOutOfRange(index))?;
        record.bytes(data)
    }
}

/// PDB header (78 bytes, big-endian)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbHeader {
    /// Database name (max 32 chars, null-terminated on disk)
    pub name: String,
    /// Database attribute flags
    pub attributes: PdbAttrs,
    /// Application-defined version
    pub version: u16,
    /// Creation time (Palm epoch seconds)
    pub creation_time: u32,
    /// Last modification time (Palm epoch seconds)
    pub modification_time: u32,
    /// Last backup time (Palm epoch seconds)
    pub backup_time: u32,
    /// Modification counter
    pub modification_number: u32,
    /// Offset of the app info block, 0 if absent
    pub app_info: u32,
    /// Offset of the sort info block, 0 if absent
    pub sort_info: u32,
    /// Database type code (four ASCII bytes)
    pub type_code: [u8; 4],
    /// Creator code (four ASCII bytes)
    pub creator: [u8; 4],
    /// Seed for record unique ids
    pub unique_id_seed: u32,
    /// Offset of the next record list, 0 in flat databases
    pub next_record_list: u32,
    /// Number of entries in the record directory
    pub num_records: u16,
}

impl PdbHeader {
    /// Database type code as text (lossy for non-ASCII bytes)
    pub fn type_str(&self) -> String {
        String::from_utf8_lossy(&self.type_code).into_owned()
    }

    /// Creator code as text (lossy for non-ASCII bytes)
    pub fn creator_str(&self) -> String {
        String::from_utf8_lossy(&self.creator).into_owned()
    }
}

/// One record directory entry, with its extent resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdbRecord {
    /// Position of this entry in the on-disk directory
    pub index: u16,
    /// Start of the record's payload in the file image
    pub offset: u32,
    /// Exclusive end of the record's payload; filled in by `compute_extents`
    pub end: u32,
    /// Record attribute flags
    pub attributes: PdbAttrs,
    /// 24-bit record unique id
    pub unique_id: u32,
}

impl PdbRecord {
    /// Length of the record's payload in bytes
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.offset)
    }

    /// True if the record has no payload bytes
    pub fn is_empty(&self) -> bool {
        self.end <= self.offset
    }

    /// Borrow this record's payload out of the file image
    pub fn bytes<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], PdbError> {
        data.get(self.offset as usize..self.end as usize)
            .ok_or(PdbError::RecordOutOfBounds {
                index: self.index,
                end: self.end,
                available: data.len(),
            })
    }
}

/// Record attribute flags (low nibble of the attribute byte)
///
/// The category and dirty bits above the nibble are kept in `bits()` but not
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PdbAttrs(u8);

impl PdbAttrs {
    /// Record is marked deleted
    pub const DELETED: Self = Self(0x08);
    /// Record is marked for archival on next sync
    pub const ARCHIVED: Self = Self(0x04);
    /// Record is locked by an application
    pub const BUSY: Self = Self(0x02);
    /// Record is private
    pub const SECRET: Self = Self(0x01);

    /// No flags set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create flags from a raw attribute byte
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if flag is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Combine flags
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_deleted(&self) -> bool {
        self.contains(Self::DELETED)
    }

    pub const fn is_archived(&self) -> bool {
        self.contains(Self::ARCHIVED)
    }

    pub const fn is_busy(&self) -> bool {
        self.contains(Self::BUSY)
    }

    pub const fn is_secret(&self) -> bool {
        self.contains(Self::SECRET)
    }
}

impl std::ops::BitOr for PdbAttrs {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for PdbAttrs {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
