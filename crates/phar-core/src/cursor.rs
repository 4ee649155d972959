//! Forward-only cursor over an octet buffer.
//!
//! A single `ByteCursor` is used either purely for reading (`Decoder`) or
//! purely for writing (`Encoder`) in this codec, but both directions share
//! one type because they share the same little-endian, length-prefixed
//! primitives.

use crate::error::{Error, Result};

/// A forward-only read/write cursor over an octet buffer.
pub struct ByteCursor {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    /// Creates a cursor for reading over an existing buffer.
    pub fn new(buf: impl Into<Vec<u8>>) -> Self {
        Self { buf: buf.into(), pos: 0 }
    }

    /// Creates an empty cursor for writing.
    pub fn new_writer() -> Self {
        Self { buf: Vec::new(), pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consumes the cursor, returning its accumulated buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Borrows the accumulated/backing buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Reads exactly `n` bytes, or all remaining bytes when `n < 0`.
    pub fn get(&mut self, n: i64) -> Result<Vec<u8>> {
        let take = if n < 0 {
            self.remaining()
        } else {
            n as usize
        };
        if take > self.remaining() {
            return Err(Error::OutOfBounds);
        }
        let start = self.pos;
        self.pos += take;
        Ok(self.buf[start..self.pos].to_vec())
    }

    /// Reads a little-endian `u16`.
    pub fn get_u16_le(&mut self) -> Result<u16> {
        let b = self.get(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a little-endian `u32`. Interpreted as unsigned even when bit 31 is set.
    pub fn get_u32_le(&mut self) -> Result<u32> {
        let b = self.get(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a `u32` length prefix followed by that many bytes.
    pub fn get_len_string(&mut self) -> Result<Vec<u8>> {
        let len = self.get_u32_le()?;
        self.get(len as i64)
    }

    /// Appends raw bytes to the write buffer.
    pub fn put(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends a little-endian `u16`.
    pub fn put_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a little-endian `u32`.
    pub fn put_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a `u32` length prefix followed by `bytes`.
    pub fn put_len_string(&mut self, bytes: &[u8]) {
        self.put_u32_le(bytes.len() as u32);
        self.put(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_primitives() {
        let mut w = ByteCursor::new_writer();
        w.put_u16_le(0xBEEF);
        w.put_u32_le(0xDEADBEEF);
        w.put_len_string(b"hello");

        let mut r = ByteCursor::new(w.into_bytes());
        assert_eq!(r.get_u16_le().unwrap(), 0xBEEF);
        assert_eq!(r.get_u32_le().unwrap(), 0xDEADBEEF);
        assert_eq!(r.get_len_string().unwrap(), b"hello");
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn negative_length_reads_all_remaining() {
        let mut r = ByteCursor::new(vec![1, 2, 3, 4]);
        r.get(1).unwrap();
        assert_eq!(r.get(-1).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn out_of_bounds_read_errors() {
        let mut r = ByteCursor::new(vec![1, 2]);
        assert!(matches!(r.get(3), Err(Error::OutOfBounds)));
    }

    #[test]
    fn u32_le_is_unsigned_even_with_high_bit_set() {
        let mut r = ByteCursor::new(vec![0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(r.get_u32_le().unwrap(), 0xFFFF_FFFF);
    }
}
