//! Error types for the save file parser.
//!
//! Only the fatal failure classes live here: I/O failures, out-of-bounds
//! reads while decoding the fixed-layout header, a missing chunk stream and
//! output encoding failures. Damage inside the chunk stream itself is not an
//! error; see [`crate::decompress::StreamEnd`].

use thiserror::Error;

/// The main error type for save parsing operations.
///
/// # Example
///
/// ```
/// use sav_stats::error::{ParserError, Result};
///
/// fn example_operation() -> Result<()> {
///     Err(ParserError::InvalidHeader {
///         reason: "save time out of range".to_string(),
///     })
/// }
///
/// assert!(example_operation().is_err());
/// ```
#[derive(Error, Debug)]
pub enum ParserError {
    /// An I/O error occurred while reading the save file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A read needed more bytes than remain in the buffer.
    ///
    /// Raised by the byte cursor. While decoding the header this is fatal
    /// for the whole parse.
    #[error(
        "Unexpected end of data at offset {offset}: needed {needed} bytes, but only {available} available"
    )]
    UnexpectedEof {
        /// Cursor offset at which the read was attempted.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left in the buffer at that offset.
        available: usize,
    },

    /// A header field decoded to a value that cannot be represented.
    #[error("Invalid header: {reason}")]
    InvalidHeader {
        /// A description of what makes the header invalid.
        reason: String,
    },

    /// No compressed chunk marker was found anywhere in the file.
    #[error("Could not find compressed data: chunk marker 0x{magic:08X} not present")]
    ChunkStreamNotFound {
        /// The chunk magic that was searched for.
        magic: u32,
    },

    /// The statistics could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParserError {
    /// Creates an `UnexpectedEof` error for a read of `needed` bytes at `offset`.
    #[must_use]
    pub fn unexpected_eof(offset: usize, needed: usize, buffer_len: usize) -> Self {
        ParserError::UnexpectedEof {
            offset,
            needed,
            available: buffer_len.saturating_sub(offset),
        }
    }

    /// Returns true for errors that come from malformed input rather than
    /// from the environment.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ParserError::UnexpectedEof { .. }
                | ParserError::InvalidHeader { .. }
                | ParserError::ChunkStreamNotFound { .. }
        )
    }
}

/// A specialized Result type for save parsing operations.
pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_error_display() {
        let err = ParserError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(err.to_string().contains("I/O error"));

        let err = ParserError::InvalidHeader {
            reason: "bad time".to_string(),
        };
        assert!(err.to_string().contains("Invalid header"));
        assert!(err.to_string().contains("bad time"));

        let err = ParserError::ChunkStreamNotFound { magic: 0x9E2A_83C1 };
        assert!(err.to_string().contains("0x9E2A83C1"));

        let err = ParserError::unexpected_eof(10, 4, 12);
        let text = err.to_string();
        assert!(text.contains("offset 10"));
        assert!(text.contains("needed 4 bytes"));
        assert!(text.contains("only 2 available"));
    }

    #[test]
    fn test_unexpected_eof_past_end() {
        // Offsets beyond the buffer (after an unconditional skip) report zero available
        match ParserError::unexpected_eof(50, 4, 20) {
            ParserError::UnexpectedEof {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 50);
                assert_eq!(needed, 4);
                assert_eq!(available, 0);
            }
            other => panic!("Expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn test_is_format_error() {
        assert!(ParserError::unexpected_eof(0, 4, 0).is_format_error());
        assert!(ParserError::ChunkStreamNotFound { magic: 1 }.is_format_error());
        let io = ParserError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert!(!io.is_format_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParserError>();
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "test error");
        let parser_err: ParserError = io_err.into();
        assert!(matches!(parser_err, ParserError::IoError(_)));
    }
}
