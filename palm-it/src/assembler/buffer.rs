//! Growable output buffer with zero-filled gaps

/// Byte buffer that accepts writes at arbitrary offsets
///
/// Reassembly places each structure at the file offset the project's tables
/// call for, in whatever order the records supply them. Writing past the
/// current end grows the buffer and zero-fills the gap; overlapping writes
/// overwrite.
#[derive(Debug, Default)]
pub struct SparseBuffer {
    bytes: Vec<u8>,
}

impl SparseBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length (one past the highest byte written so far)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write `data` at `offset`, growing and zero-filling as needed
    ///
    /// An empty write is a no-op; it does not extend the buffer to `offset`.
    pub fn write_at(&mut self, offset: usize, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        let end = offset + data.len();
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(data);
    }

    /// Borrow the bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Finish, yielding the contiguous bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
