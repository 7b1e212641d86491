//! # sav-stats
//!
//! Factory statistics from compressed game save (.sav) files.
//!
//! A save file is an uncompressed header followed by a stream of
//! independently zlib-compressed chunks. This library decodes the header,
//! reassembles the chunk stream into one body and estimates how many
//! buildings and vehicles of each kind the body describes. It does not
//! decode the object graph inside the body.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sav_stats::error::Result;
//! use sav_stats::save::parse_save;
//! use sav_stats::stats::CountingMethod;
//!
//! fn summarize(data: &[u8]) -> Result<()> {
//!     let parsed = parse_save(data, CountingMethod::References)?;
//!     let stats = &parsed.stats;
//!
//!     println!("Session: {}", stats.header.session_name);
//!     println!("Saved at: {}", stats.header.save_time);
//!     println!("Body: {} bytes", parsed.reassembly.body.len());
//!
//!     for (name, count) in &stats.machines {
//!         println!("{name}: {count}");
//!     }
//!     println!("{}", stats.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`error`] - Error types and result alias for parser operations
//! - [`binary`] - Bounds-checked little-endian reads and length-prefixed strings
//! - [`format`] - Chunk stream constants and archive format versions
//! - [`header`] - Save header decoding
//! - [`decompress`] - Chunk stream location and reassembly
//! - [`stats`] - Category tables and building/vehicle counting
//! - [`save`] - The whole pipeline for one file
//!
//! ## Format Reference
//!
//! - **Header**: fixed sequence of integers and length-prefixed strings,
//!   ending with the persistent session ID
//! - **Chunks**: 48-byte header (49 bytes for archive version `0x22222222`)
//!   starting with magic `0x9E2A83C1`, followed by a zlib payload
//!
//! All multi-byte integers are stored in little-endian byte order.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binary;
pub mod decompress;
pub mod error;
pub mod format;
pub mod header;
pub mod save;
pub mod stats;

// Re-export commonly used types at the crate root
pub use decompress::{decompress_body, Reassembly, StreamEnd};
pub use error::{ParserError, Result};
pub use format::ArchiveFormat;
pub use header::SaveHeader;
pub use save::{parse_save, parse_save_file, ParsedSave};
pub use stats::{Category, CategoryTallies, CountingMethod, FactoryStats};
