//! End-to-end save file processing.
//!
//! Runs the stages in order on one buffer: header decoding, chunk stream
//! reassembly and category counting. The header and the chunk stream are
//! both read from the start of the raw buffer; the header is decoded first
//! so that a damaged header fails before any inflation work is done.
//!
//! # Example
//!
//! ```no_run
//! use sav_stats::save::parse_save_file;
//! use sav_stats::stats::CountingMethod;
//!
//! let parsed = parse_save_file("factory.sav", CountingMethod::References)?;
//! println!("{}", parsed.stats.summary());
//! println!("{}", serde_json::to_string_pretty(&parsed.stats)?);
//! # Ok::<(), sav_stats::error::ParserError>(())
//! ```

use std::path::Path;

use crate::decompress::{decompress_body, Reassembly};
use crate::error::Result;
use crate::header::SaveHeader;
use crate::stats::{CategoryTallies, CountingMethod, FactoryStats};

/// The result of processing one save file.
#[derive(Debug, Clone)]
pub struct ParsedSave {
    /// Header plus category statistics.
    pub stats: FactoryStats,

    /// The reassembled body and stream diagnostics.
    pub reassembly: Reassembly,
}

/// Processes a save file already loaded into memory.
///
/// # Errors
///
/// - `ParserError::UnexpectedEof` or `ParserError::InvalidHeader` if the
///   header cannot be decoded
/// - `ParserError::ChunkStreamNotFound` if the file contains no chunks
///
/// Damage inside the chunk stream is not an error; statistics are derived
/// from whatever was reassembled.
pub fn parse_save(data: &[u8], method: CountingMethod) -> Result<ParsedSave> {
    let header = SaveHeader::parse(data)?;
    log::info!(
        "Header: {} on {} (save v{}, build {}), played {}",
        header.session_name,
        header.map_name,
        header.save_version,
        header.build_version,
        header.play_time_formatted
    );

    let reassembly = decompress_body(data)?;
    log::info!(
        "Compressed data found at offset 0x{:X}",
        reassembly.stream_offset
    );
    log::info!(
        "Decompressed {} bytes from {} chunks ({})",
        reassembly.body.len(),
        reassembly.chunk_count,
        reassembly.end
    );

    let tallies = CategoryTallies::count(&reassembly.body, method);
    let stats = FactoryStats::new(header, tallies);
    log::info!("Counted by {method}: {}", stats.summary());

    Ok(ParsedSave { stats, reassembly })
}

/// Reads and processes a save file from disk.
///
/// # Errors
///
/// `ParserError::IoError` if the file cannot be read, otherwise as
/// [`parse_save`].
pub fn parse_save_file<P: AsRef<Path>>(path: P, method: CountingMethod) -> Result<ParsedSave> {
    let data = std::fs::read(path.as_ref())?;
    log::info!("Read {} bytes from {}", data.len(), path.as_ref().display());
    parse_save(&data, method)
}
