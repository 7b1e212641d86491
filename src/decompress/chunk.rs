//! Compressed chunk headers.
//!
//! Every chunk in the body stream is self-describing:
//!
//! | Size | Field | Notes |
//! |------|-------|-------|
//! | 4 | magic | `0x9E2A83C1` |
//! | 4 | archive version | `0x22222222` selects the v2 layout |
//! | 8 | max chunk size | unused |
//! | 1 | compression algorithm | v2 layout only |
//! | 8 | compressed size | payload length |
//! | 8 | uncompressed size | |
//! | 16 | repeated sizes | compressed + uncompressed again |
//!
//! The zlib payload of `compressed size` bytes follows immediately.

use crate::binary::ByteReader;
use crate::error::Result;
use crate::format::{ArchiveFormat, CHUNK_MAGIC};

/// The fields of one chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Archive version field as stored.
    pub archive_version: u32,

    /// Layout implied by `archive_version`.
    pub format: ArchiveFormat,

    /// Maximum uncompressed chunk size declared by the writer.
    pub max_chunk_size: u64,

    /// Compression algorithm tag, present in the v2 layout only.
    pub compression_algorithm: Option<u8>,

    /// Length of the zlib payload following the header.
    pub compressed_size: u64,

    /// Declared size of the payload once inflated.
    pub uncompressed_size: u64,
}

/// Result of trying to read a chunk header at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkRead {
    /// A complete header was read.
    Header(ChunkHeader),

    /// The four bytes at the offset were not the chunk magic.
    NotAChunk {
        /// The value found instead.
        found: u32,
    },
}

impl ChunkHeader {
    /// Reads a chunk header at the reader's position.
    ///
    /// A non-matching magic is reported as [`ChunkRead::NotAChunk`], with the
    /// reader advanced past the four magic bytes.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if the header itself is cut off.
    pub fn read(reader: &mut ByteReader<'_>) -> Result<ChunkRead> {
        let magic = reader.read_u32()?;
        if magic != CHUNK_MAGIC {
            return Ok(ChunkRead::NotAChunk { found: magic });
        }

        let archive_version = reader.read_u32()?;
        let format = ArchiveFormat::from_version(archive_version);
        let max_chunk_size = reader.read_u64()?;

        let compression_algorithm = if format.has_algorithm_tag() {
            Some(reader.read_u8()?)
        } else {
            None
        };

        let compressed_size = reader.read_u64()?;
        let uncompressed_size = reader.read_u64()?;
        // Compressed and uncompressed sizes again
        reader.skip(16);

        Ok(ChunkRead::Header(ChunkHeader {
            archive_version,
            format,
            max_chunk_size,
            compression_algorithm,
            compressed_size,
            uncompressed_size,
        }))
    }

    /// Returns the size of this header in bytes, magic included.
    #[must_use]
    pub fn header_size(&self) -> usize {
        self.format.header_size()
    }
}
