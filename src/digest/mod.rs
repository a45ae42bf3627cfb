//! The digest-algorithm contract.
//!
//! - [`DigestAlgorithm`] - Capability trait a concrete hash supplies
//! - [`ByteOrder`] - Declared byte order of a digest value

mod algorithm;

pub use algorithm::{ByteOrder, DigestAlgorithm};
