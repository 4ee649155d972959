//! Codec for Phar-format archives: a bootstrap prelude, a length-prefixed
//! manifest, per-file (optionally DEFLATE-compressed) payloads, and a
//! trailing cryptographic signature plus fixed magic trailer.
//!
//! The codec is a pure, synchronous, in-memory transform: [`decode`] and
//! [`encode`] never suspend and never touch the filesystem. Callers own
//! file I/O; this crate only maps between bytes and the in-memory model.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod archive;
pub mod compression;
pub mod crc32;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod signature;

pub use archive::{Archive, ArchiveConfig, PRELUDE_TERMINATOR};
pub use compression::CompressionKind;
pub use crc32::crc32;
pub use cursor::ByteCursor;
pub use decoder::decode;
pub use encoder::{encode, encode_bytes};
pub use entry::Entry;
pub use error::{Error, Result};
pub use signature::SignatureKind;
