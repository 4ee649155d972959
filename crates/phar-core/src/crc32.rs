//! CRC-32/IEEE over an octet sequence, used per-entry (§4.2).
//!
//! `crc32fast` owns its own idempotently-initialized lookup table, which is
//! the "process-wide table" spec.md §9 allows implementations to keep —
//! nothing bespoke is needed on top of it.

/// Computes the standard CRC-32/IEEE checksum of `data`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
