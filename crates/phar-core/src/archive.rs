//! The in-memory model of a whole archive (§3, §4.8).

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::signature::SignatureKind;

/// Canonical prelude terminator. Every prelude ends with exactly this byte string.
pub const PRELUDE_TERMINATOR: &[u8] = b"__HALT_COMPILER(); ?>\r\n";

const HALT_TOKEN: &str = "__halt_compiler();";

fn default_prelude() -> Vec<u8> {
    let mut prelude = b"<?php ".to_vec();
    prelude.extend_from_slice(PRELUDE_TERMINATOR);
    prelude
}

/// Construction-time configuration for [`Archive::new`] (§6.3).
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub alias: Vec<u8>,
    pub prelude: Vec<u8>,
    pub signature_kind: SignatureKind,
    pub global_metadata: Vec<u8>,
    pub entries: Vec<Entry>,
    pub global_flags: u32,
    pub manifest_api: u16,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            alias: Vec::new(),
            prelude: default_prelude(),
            signature_kind: SignatureKind::default(),
            global_metadata: Vec::new(),
            entries: Vec::new(),
            global_flags: 0x10000,
            manifest_api: 17,
        }
    }
}

/// The in-memory model of a whole Phar archive.
#[derive(Debug, Clone)]
pub struct Archive {
    prelude: Vec<u8>,
    alias: Vec<u8>,
    global_flags: u32,
    manifest_api: u16,
    global_metadata: Vec<u8>,
    signature_kind: SignatureKind,
    entries: Vec<Entry>,
}

impl Default for Archive {
    fn default() -> Self {
        Self::new(ArchiveConfig::default())
    }
}

impl Archive {
    pub fn new(config: ArchiveConfig) -> Self {
        Self {
            prelude: config.prelude,
            alias: config.alias,
            global_flags: config.global_flags,
            manifest_api: config.manifest_api,
            global_metadata: config.global_metadata,
            signature_kind: config.signature_kind,
            entries: config.entries,
        }
    }

    pub fn prelude(&self) -> &[u8] {
        &self.prelude
    }

    /// Finds the case-insensitive `__halt_compiler();` token and replaces
    /// everything from that point onward with the canonical terminator.
    pub fn set_prelude(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let text = text.as_ref();
        let lower: Vec<u8> = text.iter().map(u8::to_ascii_lowercase).collect();
        let needle = HALT_TOKEN.as_bytes();
        let found = lower
            .windows(needle.len())
            .position(|w| w == needle)
            .ok_or(Error::InvalidPrelude)?;

        let mut prelude = text[..found].to_vec();
        prelude.extend_from_slice(PRELUDE_TERMINATOR);
        self.prelude = prelude;
        Ok(())
    }

    pub fn alias(&self) -> &[u8] {
        &self.alias
    }

    pub fn set_alias(&mut self, alias: impl Into<Vec<u8>>) {
        self.alias = alias.into();
    }

    pub fn global_flags(&self) -> u32 {
        self.global_flags
    }

    pub fn set_global_flags(&mut self, flags: u32) {
        self.global_flags = flags;
    }

    pub fn manifest_api(&self) -> u16 {
        self.manifest_api
    }

    pub fn set_manifest_api(&mut self, api: u16) {
        self.manifest_api = api;
    }

    pub fn global_metadata(&self) -> &[u8] {
        &self.global_metadata
    }

    pub fn set_global_metadata(&mut self, metadata: impl Into<Vec<u8>>) {
        self.global_metadata = metadata.into();
    }

    pub fn signature_kind(&self) -> SignatureKind {
        self.signature_kind
    }

    pub fn set_signature_kind(&mut self, kind: u32) -> Result<()> {
        self.signature_kind = SignatureKind::from_u32(kind)?;
        Ok(())
    }

    /// Removes any existing entry with the same name, then appends `entry`.
    /// A replacement therefore becomes the last entry, not an in-place update.
    pub fn add_file(&mut self, entry: Entry) {
        self.entries.retain(|e| e.name() != entry.name());
        self.entries.push(entry);
    }

    pub fn get_file(&self, name: impl AsRef<[u8]>) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name.as_ref())
    }

    pub fn remove_file(&mut self, name: impl AsRef<[u8]>) -> Option<Entry> {
        let idx = self.entries.iter().position(|e| e.name() == name.as_ref())?;
        Some(self.entries.remove(idx))
    }

    /// Snapshot of entries in manifest order.
    pub fn get_files(&self) -> &[Entry] {
        &self.entries
    }

    /// Clears existing entries and re-adds `entries` in order (through `add_file`,
    /// so later duplicate names within `entries` still win).
    pub fn set_files(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.entries.clear();
        for entry in entries {
            self.add_file(entry);
        }
    }

    pub fn get_file_count(&self) -> usize {
        self.entries.len()
    }
}
