//! Synthetic save file construction shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use sav_stats::format::{ARCHIVE_V2_TAG, CHUNK_MAGIC};

/// Ticks for 2024-01-15T12:30:45Z.
pub const SAMPLE_TICKS: u64 = 638_409_186_450_000_000;

/// Writes a length-prefixed single-byte string.
pub fn push_string(out: &mut Vec<u8>, s: &str) {
    if s.is_empty() {
        out.extend_from_slice(&0i32.to_le_bytes());
    } else {
        out.extend_from_slice(&i32::try_from(s.len() + 1).unwrap().to_le_bytes());
        out.extend_from_slice(s.as_bytes());
        out.push(0);
    }
}

/// Writes a length-prefixed UTF-16LE string.
pub fn push_utf16_string(out: &mut Vec<u8>, s: &str) {
    let units: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
    out.extend_from_slice(&(-i32::try_from(units.len()).unwrap()).to_le_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_le_bytes());
    }
}

/// Header field values for a synthetic save.
#[derive(Debug, Clone)]
pub struct HeaderSpec {
    pub header_version: u32,
    pub save_version: u32,
    pub build_version: u32,
    pub save_name: String,
    pub map_name: String,
    pub map_options: String,
    pub session_name: String,
    pub utf16_session_name: bool,
    pub play_time_seconds: u32,
    pub save_time_ticks: u64,
    pub visibility: u8,
    pub editor_object_version: u32,
    pub mod_metadata: String,
    pub is_modded: u32,
    pub persistent_id: String,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            header_version: 13,
            save_version: 46,
            build_version: 365_306,
            save_name: "Autosave 0".to_string(),
            map_name: "Persistent_Level".to_string(),
            map_options: "?startloc=Grass Fields?sessionName=Iron Works".to_string(),
            session_name: "Iron Works".to_string(),
            utf16_session_name: false,
            play_time_seconds: 3725,
            save_time_ticks: SAMPLE_TICKS,
            visibility: 1,
            editor_object_version: 170,
            mod_metadata: String::new(),
            is_modded: 0,
            persistent_id: "A1B2C3D4E5F60718".to_string(),
        }
    }
}

impl HeaderSpec {
    /// Encodes the header fields in file order.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.header_version.to_le_bytes());
        out.extend_from_slice(&self.save_version.to_le_bytes());
        out.extend_from_slice(&self.build_version.to_le_bytes());
        push_string(&mut out, &self.save_name);
        push_string(&mut out, &self.map_name);
        push_string(&mut out, &self.map_options);
        if self.utf16_session_name {
            push_utf16_string(&mut out, &self.session_name);
        } else {
            push_string(&mut out, &self.session_name);
        }
        out.extend_from_slice(&self.play_time_seconds.to_le_bytes());
        out.extend_from_slice(&self.save_time_ticks.to_le_bytes());
        out.push(self.visibility);
        out.extend_from_slice(&self.editor_object_version.to_le_bytes());
        push_string(&mut out, &self.mod_metadata);
        out.extend_from_slice(&self.is_modded.to_le_bytes());
        push_string(&mut out, &self.persistent_id);
        out
    }
}

/// Compresses `data` with zlib.
pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Builds one chunk around an already-compressed payload.
pub fn raw_chunk(archive_version: u32, payload: &[u8]) -> Vec<u8> {
    let size = payload.len() as u64;
    let mut out = Vec::new();
    out.extend_from_slice(&CHUNK_MAGIC.to_le_bytes());
    out.extend_from_slice(&archive_version.to_le_bytes());
    out.extend_from_slice(&131_072u64.to_le_bytes());
    if archive_version == ARCHIVE_V2_TAG {
        out.push(3);
    }
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&131_072u64.to_le_bytes());
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(&131_072u64.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Builds one chunk that inflates to `content`.
pub fn chunk(archive_version: u32, content: &[u8]) -> Vec<u8> {
    raw_chunk(archive_version, &zlib(content))
}

/// Builds a complete save from a header and the contents of each chunk.
pub fn build_save(header: &HeaderSpec, archive_version: u32, chunks: &[&[u8]]) -> Vec<u8> {
    let mut out = header.encode();
    // Unparsed save-level fields between the header and the chunk stream
    out.extend_from_slice(&[0u8; 12]);
    for content in chunks {
        out.extend_from_slice(&chunk(archive_version, content));
    }
    out
}

/// Repeats `token` `n` times, space separated.
pub fn repeat(token: &str, n: usize) -> String {
    std::iter::repeat(token).take(n).collect::<Vec<_>>().join(" ")
}

/// Writes `data` to a unique file in the system temp directory.
pub fn write_temp(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sav-stats-{}-{name}", std::process::id()));
    std::fs::write(&path, data).unwrap();
    path
}
