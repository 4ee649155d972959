use thiserror::Error as ThisError;

pub type Result<R, E = Error> = std::result::Result<R, E>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("IO Error: {0:?}")]
    Io(#[from] std::io::Error),

    #[error("Zip Error: {0:?}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Archive Codec Error: {0:?}")]
    Phar(#[from] phar_core::Error),
}
