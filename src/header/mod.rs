//! Save header decoding.
//!
//! The header is the uncompressed prefix of a save file. Its fields are
//! read strictly in order with a [`ByteReader`]:
//!
//! | Field | Encoding |
//! |-------|----------|
//! | `header_version` | u32 |
//! | `save_version` | u32 |
//! | `build_version` | u32 |
//! | `save_name` | string |
//! | `map_name` | string |
//! | map options | string (discarded) |
//! | `session_name` | string |
//! | `play_time_seconds` | u32 |
//! | save time | u64 ticks since 0001-01-01 |
//! | `visibility` | u8 |
//! | `editor_object_version` | u32 |
//! | mod metadata | string (JSON) |
//! | `is_modded` | u32 (nonzero = true) |
//! | `persistent_id` | string |
//!
//! # Example
//!
//! ```no_run
//! use sav_stats::header::SaveHeader;
//!
//! let data = std::fs::read("factory.sav").unwrap();
//! let header = SaveHeader::parse(&data)?;
//!
//! println!("Session: {}", header.session_name);
//! println!("Played: {}", header.play_time_formatted);
//! println!("Saved at: {}", header.save_time);
//! # Ok::<(), sav_stats::error::ParserError>(())
//! ```

pub mod mods;
pub mod timestamp;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::binary::ByteReader;
use crate::error::Result;

pub use mods::parse_mod_names;
pub use timestamp::{format_play_time, ticks_to_datetime};

/// Decoded save header.
///
/// Serializes to the `header` object of the statistics output. The mod
/// names and the raw tick count are available to library callers but are
/// not part of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveHeader {
    /// Header layout version.
    pub header_version: u32,

    /// Save format version.
    pub save_version: u32,

    /// Game build (changelist) that wrote the save.
    pub build_version: u32,

    /// Name of the save slot.
    pub save_name: String,

    /// Map (level) name.
    pub map_name: String,

    /// Session name shown in the load menu.
    pub session_name: String,

    /// Total play time in seconds.
    pub play_time_seconds: u32,

    /// Play time rendered as `"{h}h {m}m {s}s"`.
    pub play_time_formatted: String,

    /// When the save was written.
    pub save_time: DateTime<Utc>,

    /// Session visibility byte.
    pub visibility: u8,

    /// Editor object version.
    pub editor_object_version: u32,

    /// Number of entries in the embedded mod list.
    #[serde(skip_serializing_if = "is_zero")]
    pub mod_count: usize,

    /// Whether the save was ever loaded with mods.
    pub is_modded: bool,

    /// Persistent session identifier.
    pub persistent_id: String,

    /// Display names of the listed mods.
    #[serde(skip)]
    pub mod_names: Vec<String>,

    /// Save time as stored, in 100ns ticks since 0001-01-01.
    #[serde(skip)]
    pub save_time_ticks: u64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl SaveHeader {
    /// Decodes the header at the start of a save file.
    ///
    /// # Errors
    ///
    /// - `ParserError::UnexpectedEof` if any field runs past the end of `data`
    /// - `ParserError::InvalidHeader` if the save time cannot be represented
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        Self::read(&mut reader)
    }

    /// Decodes the header from the reader's current position.
    ///
    /// On success the reader is left just after the persistent ID. On
    /// failure no partial header is produced.
    ///
    /// # Errors
    ///
    /// Same as [`SaveHeader::parse`].
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        let header_version = reader.read_u32()?;
        let save_version = reader.read_u32()?;
        let build_version = reader.read_u32()?;
        let save_name = reader.read_string()?;
        let map_name = reader.read_string()?;
        let _map_options = reader.read_string()?;
        let session_name = reader.read_string()?;

        let play_time_seconds = reader.read_u32()?;
        let save_time_ticks = reader.read_u64()?;
        let save_time = ticks_to_datetime(save_time_ticks)?;

        let visibility = reader.read_u8()?;
        let editor_object_version = reader.read_u32()?;

        let mod_metadata = reader.read_string()?;
        let mod_names = parse_mod_names(&mod_metadata);

        let is_modded = reader.read_u32()? != 0;
        let persistent_id = reader.read_string()?;

        log::debug!(
            "Header ends at offset 0x{:X} ({} bytes remain)",
            reader.offset(),
            reader.remaining()
        );

        Ok(SaveHeader {
            header_version,
            save_version,
            build_version,
            save_name,
            map_name,
            session_name,
            play_time_seconds,
            play_time_formatted: format_play_time(play_time_seconds),
            save_time,
            visibility,
            editor_object_version,
            mod_count: mod_names.len(),
            is_modded,
            persistent_id,
            mod_names,
            save_time_ticks,
        })
    }

    /// Returns the play time as (hours, minutes, seconds).
    #[must_use]
    pub fn play_time_parts(&self) -> (u32, u32, u32) {
        timestamp::play_time_parts(self.play_time_seconds)
    }
}
