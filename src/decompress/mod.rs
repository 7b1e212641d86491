//! Chunk stream location and reassembly.
//!
//! The save body is stored as a sequence of independently zlib-compressed
//! chunks (see [`chunk`] for the header layout). This module finds the first
//! chunk, inflates every chunk in order and concatenates the results.
//!
//! # Damage tolerance
//!
//! Only a missing chunk stream is an error. Once the stream has been found,
//! anything that stops the walk (an unexpected magic, a chunk running past
//! the end of the file, a payload that fails to inflate) simply ends
//! reassembly. The body inflated so far is returned together with a
//! [`StreamEnd`] describing why the walk stopped.
//!
//! # Example
//!
//! ```no_run
//! use sav_stats::decompress::decompress_body;
//!
//! let data = std::fs::read("factory.sav").unwrap();
//! let reassembly = decompress_body(&data)?;
//!
//! println!(
//!     "Decompressed {} bytes from {} chunks ({})",
//!     reassembly.body.len(),
//!     reassembly.chunk_count,
//!     reassembly.end
//! );
//! # Ok::<(), sav_stats::error::ParserError>(())
//! ```

pub mod chunk;

use std::fmt;

use flate2::{Decompress, FlushDecompress, Status};

pub use chunk::{ChunkHeader, ChunkRead};

use crate::binary::{find_bytes, ByteReader};
use crate::error::{ParserError, Result};
use crate::format::{CHUNK_MAGIC, CHUNK_MAGIC_BYTES};

/// Why the chunk walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEnd {
    /// The last chunk ended exactly at the end of the file.
    Exhausted,

    /// Bytes following the last chunk did not start with the chunk magic.
    UnexpectedMagic {
        /// Offset of the non-matching bytes.
        offset: usize,
        /// The value found instead of the magic.
        found: u32,
    },

    /// A chunk header or payload extends past the end of the file.
    Truncated {
        /// Offset of the incomplete chunk.
        offset: usize,
    },

    /// A chunk payload failed to inflate.
    CorruptChunk {
        /// Zero-based index of the failing chunk.
        index: usize,
        /// Offset of the failing chunk.
        offset: usize,
        /// The decoder's error message.
        reason: String,
    },
}

impl StreamEnd {
    /// Returns true if the stream ended cleanly at the end of the file.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(self, StreamEnd::Exhausted)
    }
}

impl fmt::Display for StreamEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamEnd::Exhausted => write!(f, "end of file"),
            StreamEnd::UnexpectedMagic { offset, found } => {
                write!(f, "non-chunk data 0x{found:08X} at offset 0x{offset:X}")
            }
            StreamEnd::Truncated { offset } => {
                write!(f, "truncated chunk at offset 0x{offset:X}")
            }
            StreamEnd::CorruptChunk {
                index,
                offset,
                reason,
            } => write!(f, "chunk {index} at offset 0x{offset:X} failed to inflate: {reason}"),
        }
    }
}

/// The reassembled body and how the chunk walk went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassembly {
    /// Offset of the first chunk in the file.
    pub stream_offset: usize,

    /// Concatenated inflated payloads, in chunk order.
    pub body: Vec<u8>,

    /// Number of chunks fully inflated into `body`. A chunk that failed
    /// partway is not counted, though its partial output is in `body`.
    pub chunk_count: usize,

    /// Why the walk stopped.
    pub end: StreamEnd,
}

/// Finds the offset of the first chunk in a save file.
///
/// This is a plain byte search for the little-endian chunk magic over the
/// whole buffer.
///
/// # Errors
///
/// Returns `ParserError::ChunkStreamNotFound` if the magic never occurs.
pub fn locate_chunk_stream(data: &[u8]) -> Result<usize> {
    find_bytes(data, &CHUNK_MAGIC_BYTES).ok_or(ParserError::ChunkStreamNotFound {
        magic: CHUNK_MAGIC,
    })
}

/// Output space reserved per inflate step.
const INFLATE_STEP: usize = 64 * 1024;

/// Inflates every chunk starting at `start`, in order.
///
/// Never fails: the walk stops at the first anomaly and the body inflated
/// so far is returned. That includes whatever a failing chunk produced
/// before its error (a bad checksum still yields the whole payload).
#[must_use]
pub fn reassemble(data: &[u8], start: usize) -> Reassembly {
    let mut reader = ByteReader::at(data, start);
    let mut body = Vec::new();
    let mut chunk_count = 0;

    let end = loop {
        let chunk_offset = reader.offset();
        if reader.is_empty() {
            break StreamEnd::Exhausted;
        }

        let header = match ChunkHeader::read(&mut reader) {
            Ok(ChunkRead::Header(header)) => header,
            Ok(ChunkRead::NotAChunk { found }) => {
                break StreamEnd::UnexpectedMagic {
                    offset: chunk_offset,
                    found,
                }
            }
            Err(_) => {
                break StreamEnd::Truncated {
                    offset: chunk_offset,
                }
            }
        };

        let Some(payload) = usize::try_from(header.compressed_size)
            .ok()
            .and_then(|len| reader.read_bytes(len).ok())
        else {
            break StreamEnd::Truncated {
                offset: chunk_offset,
            };
        };

        log::trace!(
            "Chunk {chunk_count} at 0x{chunk_offset:X}: {} -> {} bytes ({:?})",
            header.compressed_size,
            header.uncompressed_size,
            header.format
        );

        if let Err(reason) = inflate_into(payload, &mut body) {
            break StreamEnd::CorruptChunk {
                index: chunk_count,
                offset: chunk_offset,
                reason,
            };
        }
        chunk_count += 1;
    };

    match &end {
        StreamEnd::Exhausted | StreamEnd::UnexpectedMagic { .. } => {
            log::debug!("Chunk stream ended after {chunk_count} chunks: {end}");
        }
        StreamEnd::Truncated { .. } | StreamEnd::CorruptChunk { .. } => {
            log::warn!("Chunk stream ended early after {chunk_count} chunks: {end}");
        }
    }

    Reassembly {
        stream_offset: start,
        body,
        chunk_count,
        end,
    }
}

/// Locates the chunk stream and reassembles the body.
///
/// # Errors
///
/// Returns `ParserError::ChunkStreamNotFound` if the file has no chunks.
/// Damage inside the stream is reported through [`Reassembly::end`].
pub fn decompress_body(data: &[u8]) -> Result<Reassembly> {
    let start = locate_chunk_stream(data)?;
    Ok(reassemble(data, start))
}

/// Inflates one zlib payload onto the end of `body`.
///
/// Output is appended as it is produced, so on failure `body` keeps every
/// byte inflated before the error.
fn inflate_into(payload: &[u8], body: &mut Vec<u8>) -> std::result::Result<(), String> {
    let mut inflater = Decompress::new(true);

    loop {
        body.reserve(INFLATE_STEP);
        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let consumed = usize::try_from(in_before)
            .map_or(payload.len(), |n| n.min(payload.len()));

        let status = inflater
            .decompress_vec(&payload[consumed..], body, FlushDecompress::None)
            .map_err(|e| e.to_string())?;

        if status == Status::StreamEnd {
            return Ok(());
        }
        if inflater.total_in() == in_before && inflater.total_out() == out_before {
            return Err("incomplete deflate stream".to_string());
        }
    }
}
