//! Facade crate re-exporting the Phar archive codec.
//!
//! [`phar_core`] carries the codec itself; the optional `zip-bridge`
//! feature pulls in [`phar_zip_bridge`] for lossy conversion to/from ZIP.

pub use phar_core::*;

#[cfg(feature = "zip-bridge")]
pub use phar_zip_bridge as zip_bridge;
