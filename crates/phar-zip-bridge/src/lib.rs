//! Lossy bridge between [`phar_core::Archive`] and a ZIP container (§4.9).
//!
//! Only entry names and uncompressed payloads cross the bridge. Per-entry
//! metadata, permissions, compression kind, archive alias, and the prelude
//! are not preserved in either direction.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod datetime;
mod error;

use std::io::{Cursor, Read, Write};

use phar_core::{Archive, Entry};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub use error::{Error, Result};

/// Converts `archive` into a ZIP file, one ZIP entry per [`Entry`].
///
/// ZIP entry modification time is the entry's Unix timestamp; nothing else
/// about the entry (permission, compression kind, metadata) survives.
pub fn to_zip(archive: &Archive) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in archive.get_files() {
        let name = String::from_utf8_lossy(entry.name()).into_owned();
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(datetime::unix_to_zip_datetime(entry.timestamp()));

        writer.start_file(name, options)?;
        writer.write_all(entry.payload())?;
    }
    debug!(files = archive.get_file_count(), "wrote zip bridge archive");

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Converts a ZIP file into a new [`Archive`] with default prelude,
/// default signature kind (SHA-1), and default flags; one [`Entry`] per
/// ZIP entry (uncompressed payload, default permission `0o666`, timestamp
/// from the ZIP entry or now if absent).
pub fn to_phar(zip_bytes: &[u8]) -> Result<Archive> {
    let mut zip = ZipArchive::new(Cursor::new(zip_bytes))?;
    let mut archive = Archive::default();

    for i in 0..zip.len() {
        let mut file = zip.by_index(i)?;
        if !file.is_file() {
            continue;
        }

        let name = file.name().to_string();
        let mut payload = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut payload)?;

        let timestamp = datetime::zip_datetime_to_unix(file.last_modified().unwrap_or_default());

        let mut entry = Entry::new(name, payload);
        entry.set_timestamp(timestamp as i64);
        archive.add_file(entry);
    }
    debug!(files = archive.get_file_count(), "read zip bridge archive");

    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_names_and_payloads() {
        let mut archive = Archive::default();
        archive.add_file(phar_core::Entry::new("a.txt", "hello"));
        archive.add_file(phar_core::Entry::new("dir/b.txt", "world"));

        let zip_bytes = to_zip(&archive).unwrap();
        let back = to_phar(&zip_bytes).unwrap();

        assert_eq!(back.get_file_count(), 2);
        assert_eq!(back.get_file("a.txt").unwrap().payload(), b"hello");
        assert_eq!(back.get_file("dir/b.txt").unwrap().payload(), b"world");
    }

    #[test]
    fn to_phar_uses_archive_defaults() {
        let mut archive = Archive::default();
        archive.add_file(phar_core::Entry::new("a.txt", "x"));
        let zip_bytes = to_zip(&archive).unwrap();

        let back = to_phar(&zip_bytes).unwrap();
        assert_eq!(back.signature_kind(), phar_core::SignatureKind::Sha1);
        assert_eq!(back.get_file("a.txt").unwrap().permission(), 0o666);
    }
}
