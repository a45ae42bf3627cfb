//! Bundled digest algorithms.
//!
//! These are working [`DigestAlgorithm`](crate::DigestAlgorithm)
//! implementations shipped so the framework is usable out of the box:
//!
//! - [`Crc32`] - CRC-32 (IEEE) running checksum
//! - [`Blake3`] - BLAKE3 adapter (requires the `algo-blake3` feature)

mod crc32;

#[cfg(feature = "algo-blake3")]
mod blake3;

pub use crc32::Crc32;

#[cfg(feature = "algo-blake3")]
pub use blake3::Blake3;
