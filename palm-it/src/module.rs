//! IT project data structures

/// Decoded IT project header: song metadata plus the layout tables
///
/// This mirrors the fixed 192-byte header at the start of an IT file plus the
/// variable-length tables that follow it (order list and the instrument,
/// sample, and pattern offset tables). Everything else in the file is
/// addressed through those tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItProject {
    /// Song name (max 26 chars)
    pub name: String,
    /// Pattern row hilight information (editor display only)
    pub pattern_hilight: u16,
    /// Number of orders
    pub num_orders: u16,
    /// Number of instruments
    pub num_instruments: u16,
    /// Number of samples
    pub num_samples: u16,
    /// Number of patterns
    pub num_patterns: u16,
    /// Created with tracker version (Cwt/v)
    pub created_with: u16,
    /// Compatible with version (Cmwt)
    pub compatible_with: u16,
    /// Project flags
    pub flags: ItFlags,
    /// Special flags (embedded message, MIDI configuration)
    pub special: ItSpecial,
    /// Global volume (0-128)
    pub global_volume: u8,
    /// Mix volume (0-128)
    pub mix_volume: u8,
    /// Initial speed (ticks per row)
    pub initial_speed: u8,
    /// Initial tempo (BPM)
    pub initial_tempo: u8,
    /// Panning separation (0-128)
    pub panning_separation: u8,
    /// Pitch wheel depth for MIDI
    pub pitch_wheel_depth: u8,
    /// Song message length in bytes
    pub message_length: u16,
    /// File offset of the song message
    pub message_offset: u32,
    /// Per-channel default volume (64 channels)
    pub channel_volumes: [u8; 64],
    /// Per-channel default panning (64 channels)
    pub channel_pans: [u8; 64],
    /// Pattern order table
    pub order_table: Vec<u8>,
    /// File offsets of the instrument headers
    pub instrument_offsets: Vec<u32>,
    /// File offsets of the sample headers
    pub sample_offsets: Vec<u32>,
    /// File offsets of the pattern data blocks
    pub pattern_offsets: Vec<u32>,
}

impl ItProject {
    /// Tracker version that created the project, as four hex digits
    pub fn created_with_str(&self) -> String {
        format!("{:04x}", self.created_with)
    }

    /// Oldest tracker version the project is compatible with, as four hex digits
    pub fn compatible_with_str(&self) -> String {
        format!("{:04x}", self.compatible_with)
    }

    /// Check if a song message is attached
    pub fn has_message(&self) -> bool {
        self.special.contains(ItSpecial::HAS_MESSAGE)
    }

    /// Check if a MIDI configuration is embedded
    pub fn has_embedded_midi(&self) -> bool {
        self.special.contains(ItSpecial::EMBEDDED_MIDI)
    }

    /// Check if the project uses instruments (vs samples-only mode)
    pub fn uses_instruments(&self) -> bool {
        self.flags.contains(ItFlags::INSTRUMENTS)
    }

    /// Check if the project mixes in stereo
    pub fn is_stereo(&self) -> bool {
        self.flags.contains(ItFlags::STEREO)
    }

    /// Check if the project uses linear frequency slides (vs Amiga slides)
    pub fn uses_linear_slides(&self) -> bool {
        self.flags.contains(ItFlags::LINEAR_SLIDES)
    }
}

/// IT project flags (from header byte 0x002C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItFlags(u16);

impl ItFlags {
    /// Stereo output
    pub const STEREO: Self = Self(0x0001);
    /// Vol0MixOptimizations - skip mixing silent channels
    pub const VOL0_MIX_OPT: Self = Self(0x0002);
    /// Use instruments (vs samples-only mode)
    pub const INSTRUMENTS: Self = Self(0x0004);
    /// Use linear slides (vs Amiga slides)
    pub const LINEAR_SLIDES: Self = Self(0x0008);
    /// Use old effects (S3M compatibility)
    pub const OLD_EFFECTS: Self = Self(0x0010);
    /// Link G memory with E/F for portamento
    pub const LINK_G_MEMORY: Self = Self(0x0020);
    /// Use MIDI pitch controller
    pub const MIDI_PITCH_CTRL: Self = Self(0x0040);
    /// Request embedded MIDI configuration
    pub const EMBEDDED_MIDI: Self = Self(0x0080);

    /// Create flags from raw u16
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u16 {
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
}

impl std::ops::BitOr for ItFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for ItFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// IT special flags (from header byte 0x002E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItSpecial(u16);

impl ItSpecial {
    /// Song message attached
    pub const HAS_MESSAGE: Self = Self(0x0001);
    /// Edit history embedded
    pub const EDIT_HISTORY: Self = Self(0x0002);
    /// Pattern hilight embedded
    pub const PATTERN_HILIGHT: Self = Self(0x0004);
    /// MIDI configuration embedded
    pub const EMBEDDED_MIDI: Self = Self(0x0008);

    /// Create flags from raw u16
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Check if flag is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for ItSpecial {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// IT sample header (80 bytes on disk)
///
/// The flag and convert bytes are carried verbatim; reassembly does not need
/// to know whether a sample is 16-bit, stereo, or compressed, only where its
/// payload belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItSample {
    /// DOS filename (max 12 chars)
    pub filename: String,
    /// Global volume (0-64)
    pub global_volume: u8,
    /// Raw sample flags byte, not interpreted here
    pub flags: u8,
    /// Default volume (0-64)
    pub default_volume: u8,
    /// Sample name (max 26 chars)
    pub name: String,
    /// Raw convert byte, not interpreted here
    pub convert: u8,
    /// Default pan byte (DfP)
    pub default_pan: u8,
    /// Sample length in sample frames (not bytes)
    pub length: u32,
    /// Loop begin (sample frames)
    pub loop_begin: u32,
    /// Loop end (sample frames)
    pub loop_end: u32,
    /// Playback rate for C-5 in Hz
    pub c5_speed: u32,
    /// Sustain loop begin (sample frames)
    pub sustain_loop_begin: u32,
    /// Sustain loop end (sample frames)
    pub sustain_loop_end: u32,
    /// File offset where the sample's audio payload lives
    pub sample_pointer: u32,
    /// Vibrato speed (0-64)
    pub vibrato_speed: u8,
    /// Vibrato depth (0-64)
    pub vibrato_depth: u8,
    /// Vibrato rate (0-64)
    pub vibrato_rate: u8,
    /// Vibrato waveform type
    pub vibrato_type: u8,
}

/// IT pattern block header (8 bytes on disk)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItPatternHeader {
    /// Length of the packed pattern data in bytes (header excluded)
    pub length: u16,
    /// Number of rows (1-200)
    pub rows: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with(flags: ItFlags, special: ItSpecial) -> ItProject {
        ItProject {
            name: "test".into(),
            pattern_hilight: 0x1004,
            num_orders: 0,
            num_instruments: 0,
            num_samples: 0,
            num_patterns: 0,
            created_with: 0x0214,
            compatible_with: 0x0200,
            flags,
            special,
            global_volume: 128,
            mix_volume: 48,
            initial_speed: 6,
            initial_tempo: 125,
            panning_separation: 128,
            pitch_wheel_depth: 0,
            message_length: 0,
            message_offset: 0,
            channel_volumes: [64; 64],
            channel_pans: [32; 64],
            order_table: Vec::new(),
            instrument_offsets: Vec::new(),
            sample_offsets: Vec::new(),
            pattern_offsets: Vec::new(),
        }
    }

    #[test]
    fn test_version_strings() {
        let project = project_with(ItFlags::default(), ItSpecial::default());
        assert_eq!(project.created_with_str(), "0214");
        assert_eq!(project.compatible_with_str(), "0200");
    }

    #[test]
    fn test_flag_predicates() {
        let project = project_with(
            ItFlags::STEREO | ItFlags::INSTRUMENTS,
            ItSpecial::HAS_MESSAGE,
        );
        assert!(project.is_stereo());
        assert!(project.uses_instruments());
        assert!(!project.uses_linear_slides());
        assert!(project.has_message());
        assert!(!project.has_embedded_midi());
    }

    #[test]
    fn test_special_bits() {
        let special = ItSpecial::from_bits(0x0009);
        assert!(special.contains(ItSpecial::HAS_MESSAGE));
        assert!(special.contains(ItSpecial::EMBEDDED_MIDI));
        assert!(!special.contains(ItSpecial::EDIT_HISTORY));
    }
}
