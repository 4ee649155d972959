//! Parses a byte buffer into an [`Archive`] (§4.5).

use tracing::{debug, trace};

use crate::archive::{Archive, ArchiveConfig, PRELUDE_TERMINATOR};
use crate::compression::{decompress, CompressionKind};
use crate::crc32::crc32;
use crate::cursor::ByteCursor;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::signature::SignatureKind;

const MAGIC: &[u8; 4] = b"GBMB";

/// Parses `buffer` as a Phar archive.
///
/// Validates the magic trailer, the signature, the prelude terminator, and
/// manifest framing, and checks every entry's CRC-32 before returning.
pub fn decode(buffer: &[u8]) -> Result<Archive> {
    if buffer.len() < 8 || &buffer[buffer.len() - 4..] != MAGIC {
        return Err(Error::MagicMismatch);
    }

    let sig_kind_offset = buffer.len() - 8;
    let sig_kind_word = u32::from_le_bytes([
        buffer[sig_kind_offset],
        buffer[sig_kind_offset + 1],
        buffer[sig_kind_offset + 2],
        buffer[sig_kind_offset + 3],
    ]);
    let signature_kind = SignatureKind::from_u32(sig_kind_word)?;
    trace!(kind = ?signature_kind, "read signature kind");

    let digest_len = signature_kind.digest_length();
    if sig_kind_offset < digest_len {
        return Err(Error::OutOfBounds);
    }
    let digest_offset = sig_kind_offset - digest_len;
    let expected_digest = &buffer[digest_offset..sig_kind_offset];
    let signed_region = &buffer[..digest_offset];

    if !signature_kind.verify(signed_region, expected_digest) {
        return Err(Error::SignatureInvalid);
    }
    debug!(len = signed_region.len(), "signature verified");

    let terminator_pos = signed_region
        .windows(PRELUDE_TERMINATOR.len())
        .position(|w| w == PRELUDE_TERMINATOR)
        .ok_or(Error::PreludeTerminatorMissing)?;
    let prelude_end = terminator_pos + PRELUDE_TERMINATOR.len();
    let prelude = signed_region[..prelude_end].to_vec();

    if prelude_end + 4 > signed_region.len() {
        return Err(Error::TruncatedManifest);
    }
    let manifest_len = u32::from_le_bytes([
        signed_region[prelude_end],
        signed_region[prelude_end + 1],
        signed_region[prelude_end + 2],
        signed_region[prelude_end + 3],
    ]) as usize;

    let manifest_start = prelude_end + 4;
    if manifest_start + manifest_len > signed_region.len() {
        return Err(Error::TruncatedManifest);
    }
    let manifest_bytes = &signed_region[manifest_start..manifest_start + manifest_len];
    let payload_region = &signed_region[manifest_start + manifest_len..];

    let mut man = ByteCursor::new(manifest_bytes.to_vec());
    let files_count = man.get_u32_le()?;
    let manifest_api = man.get_u16_le()?;
    let global_flags = man.get_u32_le()?;
    let alias = man.get_len_string()?;
    let global_metadata = man.get_len_string()?;
    debug!(files_count, manifest_api, "parsed manifest header");

    let mut payload = ByteCursor::new(payload_region.to_vec());
    let mut entries = Vec::with_capacity(files_count as usize);

    for _ in 0..files_count {
        let name = man.get_len_string()?;
        let _uncompressed_size = man.get_u32_le()?; // retained, not authoritative; see §9.
        let timestamp = man.get_u32_le()?;
        let compressed_size = man.get_u32_le()?;
        let stored_crc32 = man.get_u32_le()?;
        let flags_word = man.get_u32_le()?;
        let entry_metadata = man.get_len_string()?;

        let compressed_bytes = payload.get(compressed_size as i64)?;

        let compression = CompressionKind::from_flags_word(flags_word)?;
        let permission = flags_word & 0x0FFF;

        let payload_bytes = decompress(compression, &compressed_bytes)?;

        let actual_crc32 = crc32(&payload_bytes);
        if actual_crc32 != stored_crc32 {
            return Err(Error::FileCorrupt { name });
        }

        let mut entry = Entry::new(name, payload_bytes);
        entry.set_compression(compression)?;
        entry.set_permission(permission)?;
        entry.set_timestamp(timestamp as i64);
        entry.set_metadata(entry_metadata);
        trace!(name = ?entry.name(), "decoded entry");
        entries.push(entry);
    }

    Ok(Archive::new(ArchiveConfig {
        alias,
        prelude,
        signature_kind,
        global_metadata,
        entries,
        global_flags,
        manifest_api,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn decode_rejects_missing_magic() {
        assert!(matches!(decode(&[0u8; 16]), Err(Error::MagicMismatch)));
    }

    #[test]
    fn round_trips_minimal_archive() {
        let mut archive = Archive::default();
        archive.add_file(Entry::new("a.txt", "hi"));
        let bytes = encode(&archive).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.prelude(), archive.prelude());
        assert_eq!(decoded.get_file_count(), 1);
        assert_eq!(decoded.get_file("a.txt").unwrap().payload(), b"hi");
    }
}
