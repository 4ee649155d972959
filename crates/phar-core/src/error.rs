use thiserror::Error as ThisError;

pub type Result<R, E = Error> = std::result::Result<R, E>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("IO Error: {0:?}")]
    Io(#[from] std::io::Error),

    #[error("buffer exhausted reading past end")]
    OutOfBounds,

    #[error("trailing magic is not GBMB")]
    MagicMismatch,

    #[error("unknown signature kind {0:#x}")]
    UnknownSignature(u32),

    #[error("archive signature does not verify")]
    SignatureInvalid,

    #[error("__HALT_COMPILER(); ?>\\r\\n terminator not found in prelude")]
    PreludeTerminatorMissing,

    #[error("manifest length exceeds remaining bytes")]
    TruncatedManifest,

    #[error("file {name:?} failed CRC-32 verification")]
    FileCorrupt { name: Vec<u8> },

    #[error("compression kind {0:#x} is not supported")]
    UnsupportedCompression(u16),

    #[error("compression engine failed: {cause}")]
    CompressionError { cause: String },

    #[error("prelude text has no __halt_compiler(); token")]
    InvalidPrelude,

    #[error("permission {0:#x} is out of the 0..=0xFFF range")]
    PermissionOutOfRange(u32),

    #[error("cannot encode an archive with no entries")]
    EmptyArchive,
}
