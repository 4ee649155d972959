//! The two-way adapter over the external raw-DEFLATE engine (§4.3).

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};

/// Per-file compression kind, stored in the high nibble of the flags word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum CompressionKind {
    None = 0x0000,
    Gz = 0x1000,
    /// Reserved flag value. Encode refuses it; decode rejects it (spec.md §9).
    Bzip2 = 0x2000,
}

impl CompressionKind {
    pub const FLAGS_MASK: u16 = 0xF000;

    pub fn from_flags_word(flags: u32) -> Result<Self> {
        let bits = (flags & Self::FLAGS_MASK as u32) as u16;
        Self::try_from(bits).map_err(|_| Error::UnsupportedCompression(bits))
    }
}

/// Raw DEFLATE (no zlib/gzip wrapper), matching the Phar on-disk convention.
pub fn deflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::CompressionError { cause: e.to_string() })?;
    encoder
        .finish()
        .map_err(|e| Error::CompressionError { cause: e.to_string() })
}

/// Raw INFLATE counterpart to [`deflate_raw`].
pub fn inflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::CompressionError { cause: e.to_string() })?;
    Ok(out)
}

/// Compresses `payload` per `kind`. Only `None`/`Gz` are supported on the write path.
pub fn compress(kind: CompressionKind, payload: &[u8]) -> Result<Vec<u8>> {
    match kind {
        CompressionKind::None => Ok(payload.to_vec()),
        CompressionKind::Gz => deflate_raw(payload),
        CompressionKind::Bzip2 => Err(Error::UnsupportedCompression(kind.into())),
    }
}

/// Decompresses `bytes` per `kind`. Only `None`/`Gz` are supported on the read path.
pub fn decompress(kind: CompressionKind, bytes: &[u8]) -> Result<Vec<u8>> {
    match kind {
        CompressionKind::None => Ok(bytes.to_vec()),
        CompressionKind::Gz => inflate_raw(bytes),
        CompressionKind::Bzip2 => Err(Error::UnsupportedCompression(kind.into())),
    }
}
