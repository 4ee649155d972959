//! Whole-archive cryptographic signing/verification (§4.4).

use md5::Md5;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// Selects the whole-archive hash function (spec.md's "signature kind").
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum SignatureKind {
    Md5 = 0x01,
    Sha1 = 0x02,
    Sha256 = 0x04,
    Sha512 = 0x08,
}

impl Default for SignatureKind {
    fn default() -> Self {
        SignatureKind::Sha1
    }
}

impl SignatureKind {
    pub fn from_u32(value: u32) -> Result<Self> {
        Self::try_from(value).map_err(|_| Error::UnknownSignature(value))
    }

    /// Raw digest length in bytes for this signature kind.
    pub fn digest_length(self) -> usize {
        match self {
            SignatureKind::Md5 => 16,
            SignatureKind::Sha1 => 20,
            SignatureKind::Sha256 => 32,
            SignatureKind::Sha512 => 64,
        }
    }

    /// Computes the raw (non-hex) digest of `data`.
    pub fn compute_raw(self, data: &[u8]) -> Vec<u8> {
        match self {
            SignatureKind::Md5 => Md5::digest(data).to_vec(),
            SignatureKind::Sha1 => Sha1::digest(data).to_vec(),
            SignatureKind::Sha256 => Sha256::digest(data).to_vec(),
            SignatureKind::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Verifies `candidate` (raw bytes) against the digest of `data`.
    ///
    /// Compares raw-to-raw; spec.md §9 explicitly calls out a known source
    /// bug that instead compares a raw digest against a hex string, which
    /// would spuriously fail every valid archive. That bug is not
    /// replicated here.
    pub fn verify(self, data: &[u8], candidate: &[u8]) -> bool {
        self.compute_raw(data) == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths_match_spec() {
        assert_eq!(SignatureKind::Md5.digest_length(), 16);
        assert_eq!(SignatureKind::Sha1.digest_length(), 20);
        assert_eq!(SignatureKind::Sha256.digest_length(), 32);
        assert_eq!(SignatureKind::Sha512.digest_length(), 64);
    }

    #[test]
    fn compute_raw_has_declared_length() {
        for kind in [
            SignatureKind::Md5,
            SignatureKind::Sha1,
            SignatureKind::Sha256,
            SignatureKind::Sha512,
        ] {
            assert_eq!(kind.compute_raw(b"payload").len(), kind.digest_length());
        }
    }

    #[test]
    fn verify_accepts_matching_and_rejects_tampered() {
        let digest = SignatureKind::Sha256.compute_raw(b"payload");
        assert!(SignatureKind::Sha256.verify(b"payload", &digest));
        assert!(!SignatureKind::Sha256.verify(b"payload!", &digest));
    }

    #[test]
    fn unknown_signature_kind_is_rejected() {
        assert!(SignatureKind::from_u32(0x10).is_err());
    }
}
