//! Constants and small enums describing the save container layout.
//!
//! A save file is an uncompressed header followed by a stream of
//! independently zlib-compressed chunks. Each chunk starts with the package
//! file tag `0x9E2A83C1` and an archive version field that decides whether a
//! one-byte compression algorithm tag follows.
//!
//! # Example
//!
//! ```
//! use sav_stats::format::{ArchiveFormat, ARCHIVE_V2_TAG, CHUNK_MAGIC_BYTES};
//!
//! assert_eq!(CHUNK_MAGIC_BYTES, [0xC1, 0x83, 0x2A, 0x9E]);
//! assert_eq!(ArchiveFormat::from_version(ARCHIVE_V2_TAG), ArchiveFormat::V2);
//! assert_eq!(ArchiveFormat::from_version(0), ArchiveFormat::V1);
//! ```

/// The magic value opening every compressed chunk.
pub const CHUNK_MAGIC: u32 = 0x9E2A_83C1;

/// [`CHUNK_MAGIC`] as it appears on disk (little-endian).
pub const CHUNK_MAGIC_BYTES: [u8; 4] = CHUNK_MAGIC.to_le_bytes();

/// Archive version value marking a v2 chunk header.
pub const ARCHIVE_V2_TAG: u32 = 0x2222_2222;

/// Size of the "max chunk size" field following the archive version.
pub const MAX_CHUNK_SIZE_FIELD_LEN: usize = 8;

/// Size of the compressed size field.
pub const COMPRESSED_SIZE_FIELD_LEN: usize = 8;

/// Size of the size fields that follow the compressed size.
///
/// Uncompressed size, then the compressed and uncompressed sizes repeated.
pub const TRAILING_SIZE_FIELDS_LEN: usize = 24;

/// Save timestamps count 100ns ticks.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Seconds between 0001-01-01 and the Unix epoch.
pub const TICKS_EPOCH_OFFSET_SECS: i64 = 62_135_596_800;

/// Chunk header layout, selected by the archive version field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// Original layout with no compression algorithm tag.
    V1,

    /// Layout with a one-byte compression algorithm tag after the
    /// max chunk size field.
    V2,
}

impl ArchiveFormat {
    /// Determines the layout from a chunk's archive version field.
    #[must_use]
    pub const fn from_version(version: u32) -> Self {
        if version == ARCHIVE_V2_TAG {
            ArchiveFormat::V2
        } else {
            ArchiveFormat::V1
        }
    }

    /// Returns whether a compression algorithm byte is present.
    #[must_use]
    pub const fn has_algorithm_tag(&self) -> bool {
        matches!(self, ArchiveFormat::V2)
    }

    /// Returns the total chunk header size in bytes, magic included.
    #[must_use]
    pub const fn header_size(&self) -> usize {
        let base = 4
            + 4
            + MAX_CHUNK_SIZE_FIELD_LEN
            + COMPRESSED_SIZE_FIELD_LEN
            + TRAILING_SIZE_FIELDS_LEN;
        if self.has_algorithm_tag() {
            base + 1
        } else {
            base
        }
    }
}
