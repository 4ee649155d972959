//! Serializes an [`Archive`] to a byte buffer (§4.6).

use bytes::Bytes;
use tracing::{debug, trace};

use crate::archive::Archive;
use crate::crc32::crc32;
use crate::cursor::ByteCursor;
use crate::error::{Error, Result};

const MAGIC: &[u8; 4] = b"GBMB";

/// Serializes `archive` to its on-disk byte representation.
///
/// Deterministic: given a deterministic DEFLATE engine, encoding the same
/// archive twice produces byte-identical output.
pub fn encode(archive: &Archive) -> Result<Vec<u8>> {
    if archive.get_file_count() == 0 {
        return Err(Error::EmptyArchive);
    }

    let mut out = ByteCursor::new_writer();
    out.put(archive.prelude());

    let mut man = ByteCursor::new_writer();
    man.put_u32_le(archive.get_file_count() as u32);
    man.put_u16_le(archive.manifest_api());
    man.put_u32_le(archive.global_flags());
    man.put_len_string(archive.alias());
    man.put_len_string(archive.global_metadata());

    let mut payloads = ByteCursor::new_writer();
    for entry in archive.get_files() {
        let compressed = entry.compressed_bytes()?;

        man.put_len_string(entry.name());
        man.put_u32_le(entry.size() as u32);
        man.put_u32_le(entry.timestamp());
        man.put_u32_le(compressed.len() as u32);
        man.put_u32_le(crc32(entry.payload()));
        man.put_u32_le(entry.flags_word());
        man.put_len_string(entry.metadata());

        payloads.put(&compressed);
        trace!(name = ?entry.name(), compressed_len = compressed.len(), "encoded entry");
    }

    let man_bytes = man.into_bytes();
    out.put_u32_le(man_bytes.len() as u32);
    out.put(&man_bytes);
    out.put(&payloads.into_bytes());
    debug!(files = archive.get_file_count(), "assembled manifest and payloads");

    let digest = archive.signature_kind().compute_raw(out.bytes());
    out.put(&digest);
    out.put_u32_le(archive.signature_kind().into());
    out.put(MAGIC);

    Ok(out.into_bytes())
}

/// Same as [`encode`], returning the alternate `bytes::Bytes` return form
/// (spec.md §6.3's "switch between an octet sequence and a byte-array
/// return form").
pub fn encode_bytes(archive: &Archive) -> Result<Bytes> {
    Ok(Bytes::from(encode(archive)?))
}
