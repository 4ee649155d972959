//! One archived file (§3, §4.7).

use crate::compression::{compress, CompressionKind};
use crate::error::{Error, Result};

fn now_unix_seconds() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

/// The in-memory model of one file inside an [`Archive`](crate::archive::Archive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Vec<u8>,
    payload: Vec<u8>,
    compression: CompressionKind,
    permission: u16,
    timestamp: u32,
    metadata: Vec<u8>,
}

impl Entry {
    /// `permission` defaults to `0o666`; `timestamp` to the current Unix second.
    pub fn new(name: impl Into<Vec<u8>>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
            compression: CompressionKind::None,
            permission: 0o666,
            timestamp: now_unix_seconds(),
            metadata: Vec::new(),
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<Vec<u8>>) {
        self.name = name.into();
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: impl Into<Vec<u8>>) {
        self.payload = payload.into();
    }

    pub fn compression(&self) -> CompressionKind {
        self.compression
    }

    /// Only `CompressionKind::None`/`Gz` are accepted.
    pub fn set_compression(&mut self, kind: CompressionKind) -> Result<()> {
        if kind == CompressionKind::Bzip2 {
            return Err(Error::UnsupportedCompression(kind.into()));
        }
        self.compression = kind;
        Ok(())
    }

    pub fn permission(&self) -> u16 {
        self.permission
    }

    /// Must be within `0..=0xFFF`.
    pub fn set_permission(&mut self, permission: u32) -> Result<()> {
        if permission > 0xFFF {
            return Err(Error::PermissionOutOfRange(permission));
        }
        self.permission = permission as u16;
        Ok(())
    }

    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// A negative timestamp is replaced by the current wall-clock second.
    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = if timestamp < 0 {
            now_unix_seconds()
        } else {
            timestamp as u32
        };
    }

    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: impl Into<Vec<u8>>) {
        self.metadata = metadata.into();
    }

    /// Uncompressed payload length.
    pub fn size(&self) -> usize {
        self.payload.len()
    }

    /// Computed on demand from the current payload and compression kind.
    pub fn compressed_bytes(&self) -> Result<Vec<u8>> {
        compress(self.compression, &self.payload)
    }

    /// Length of [`Entry::compressed_bytes`].
    pub fn compressed_size(&self) -> Result<usize> {
        Ok(self.compressed_bytes()?.len())
    }

    /// The per-file flags word: `permission | (compression & 0xF000)`.
    pub fn flags_word(&self) -> u32 {
        (self.permission as u32 & 0x0FFF) | (u16::from(self.compression) as u32 & 0xF000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let e = Entry::new("a.txt", "hi");
        assert_eq!(e.permission(), 0o666);
        assert_eq!(e.compression(), CompressionKind::None);
        assert_eq!(e.size(), 2);
    }

    #[test]
    fn rejects_bzip2_and_out_of_range_permission() {
        let mut e = Entry::new("a.txt", "hi");
        assert!(e.set_compression(CompressionKind::Bzip2).is_err());
        assert!(e.set_permission(0x1000).is_err());
        assert!(e.set_permission(0xFFF).is_ok());
    }

    #[test]
    fn negative_timestamp_uses_now() {
        let mut e = Entry::new("a.txt", "hi");
        e.set_timestamp(-1);
        assert!(e.timestamp() > 0);
    }

    #[test]
    fn flags_word_combines_permission_and_compression() {
        let mut e = Entry::new("a.txt", "hi");
        e.set_permission(0o644).unwrap();
        e.set_compression(CompressionKind::Gz).unwrap();
        assert_eq!(e.flags_word(), 0o644 | 0x1000);
    }
}
