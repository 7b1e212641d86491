//! Forward-only binary cursor for reading save file fields.
//!
//! [`ByteReader`] wraps a borrowed byte buffer and an offset. Every typed
//! read checks bounds before touching the buffer, so a failed read leaves
//! the offset exactly where it was.
//!
//! # Endianness
//!
//! All multi-byte integers in save files are little-endian.
//!
//! # Strings
//!
//! Strings are length-prefixed with a signed 32-bit count:
//! - `0`: empty string, nothing follows
//! - `n > 0`: `n` single-byte (Latin-1) characters, the last one a NUL
//! - `n < 0`: `-n` UTF-16LE code units, the last one a NUL
//!
//! # Example
//!
//! ```
//! use sav_stats::binary::ByteReader;
//!
//! let data = [0x2A, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, b'H', b'i', 0x00];
//! let mut reader = ByteReader::new(&data);
//!
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert_eq!(reader.read_string().unwrap(), "Hi");
//! assert_eq!(reader.remaining(), 0);
//! ```

use crate::error::{ParserError, Result};

/// A bounds-checked little-endian reader over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Creates a reader positioned at `offset` within `data`.
    #[must_use]
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of unread bytes.
    ///
    /// Saturates at zero once [`skip`](Self::skip) has moved past the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Advances the offset by `n` bytes without bounds checking.
    ///
    /// A subsequent read fails if this moved past the end of the buffer.
    pub fn skip(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n);
    }

    /// Reads `len` raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| ParserError::unexpected_eof(self.offset, len, self.data.len()))?;

        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if the buffer is exhausted.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `i32`.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads a length-prefixed string.
    ///
    /// The terminating NUL (one byte, or one UTF-16 code unit) is consumed
    /// but not returned. Unpaired surrogates decode to U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::UnexpectedEof` if the prefix or the declared
    /// string body extends past the end of the buffer. The offset is
    /// restored to the start of the length prefix in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use sav_stats::binary::ByteReader;
    ///
    /// // -3 => two UTF-16 code units plus terminator
    /// let data = [0xFD, 0xFF, 0xFF, 0xFF, b'O', 0x00, b'K', 0x00, 0x00, 0x00];
    /// let mut reader = ByteReader::new(&data);
    /// assert_eq!(reader.read_string().unwrap(), "OK");
    /// ```
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.offset;
        let length = self.read_i32()?;

        let result = match length {
            0 => Ok(String::new()),
            n if n > 0 => self.read_latin1(n.unsigned_abs() as usize),
            n => self.read_utf16(n.unsigned_abs() as usize),
        };

        if result.is_err() {
            // Keep the cursor state untouched on failure
            self.offset = start;
        }
        result
    }

    fn read_latin1(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_bytes(len)?;
        Ok(bytes[..len - 1].iter().map(|&b| char::from(b)).collect())
    }

    fn read_utf16(&mut self, units: usize) -> Result<String> {
        let byte_len = units
            .checked_mul(2)
            .ok_or_else(|| ParserError::unexpected_eof(self.offset, usize::MAX, self.data.len()))?;
        let bytes = self.read_bytes(byte_len)?;

        let code_units = bytes[..byte_len - 2]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

        Ok(char::decode_utf16(code_units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }
}

/// Searches `haystack` for the first occurrence of `needle`.
///
/// Returns the offset of the match, or `None`. An empty needle matches at 0.
#[must_use]
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
