//! Digest persistence - text encoding and byte-order-aware serialization.
//!
//! The framework serializes exactly `digest_size()` bytes. A digest is
//! written in the byte order the caller requests; when that differs from
//! the algorithm's declared order the byte sequence is reversed, so a
//! value saved in either order loads back to an equal digest.

use std::cmp::Ordering;
use std::io::{Read, Write};

use crate::digest::{ByteOrder, DigestAlgorithm};
use crate::error::HashError;
use crate::hasher::IncrementalHasher;
use crate::util;

impl<A: DigestAlgorithm> IncrementalHasher<A> {
    /// Returns the digest as a lowercase hex string.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::{Crc32, IncrementalHasher};
    ///
    /// let mut hasher = IncrementalHasher::new(Crc32::new())?;
    /// hasher.hash_bytes(b"123456789")?;
    /// assert_eq!(hasher.to_text().len(), 8);
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn to_text(&self) -> String {
        util::to_hex(&self.digest())
    }

    /// Installs a digest value from its hex representation.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Parse`] if the string is not exactly
    /// `2 * digest_size()` hex characters. The prior digest value is
    /// unspecified after a failed decode; callers must not rely on it.
    pub fn from_text(&mut self, text: &str) -> Result<(), HashError> {
        let bytes = util::from_hex(text, self.digest_size())?;
        self.algorithm_mut().set_digest(&bytes)
    }

    /// Compares digest values byte-wise.
    ///
    /// Both digests are compared in their declared byte order; the result
    /// is a total order usable for sorting and deduplication.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.digest().cmp(&other.digest())
    }

    /// Writes the digest to a sink in the requested byte order.
    ///
    /// Exactly `digest_size()` bytes are written.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Io`] unchanged from the sink.
    pub fn save_to_stream<W: Write>(
        &self,
        sink: &mut W,
        order: ByteOrder,
    ) -> Result<(), HashError> {
        sink.write_all(&self.save_to_bytes(order))?;
        Ok(())
    }

    /// Returns the digest serialized in the requested byte order.
    pub fn save_to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        let mut bytes = self.digest();
        if order != self.byte_order() {
            bytes.reverse();
        }
        bytes
    }

    /// Reads a digest from a source, interpreting it in the requested byte
    /// order.
    ///
    /// Exactly `digest_size()` bytes are consumed.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Io`] unchanged from the source, or
    /// [`HashError::Parse`] if the bytes are not a valid digest. The prior
    /// digest value is unspecified after a failure.
    pub fn load_from_stream<R: Read>(
        &mut self,
        source: &mut R,
        order: ByteOrder,
    ) -> Result<(), HashError> {
        let mut bytes = vec![0u8; self.digest_size()];
        source.read_exact(&mut bytes)?;
        self.install_digest(bytes, order)
    }

    /// Installs a digest from a buffer, interpreting it in the requested
    /// byte order.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Parse`] if `bytes` is not exactly
    /// `digest_size()` bytes or is not a valid digest.
    pub fn load_from_bytes(&mut self, bytes: &[u8], order: ByteOrder) -> Result<(), HashError> {
        if bytes.len() != self.digest_size() {
            return Err(HashError::Parse {
                message: "serialized digest has wrong length",
            });
        }
        self.install_digest(bytes.to_vec(), order)
    }

    fn install_digest(&mut self, mut bytes: Vec<u8>, order: ByteOrder) -> Result<(), HashError> {
        if order != self.byte_order() {
            bytes.reverse();
        }
        self.algorithm_mut().set_digest(&bytes)
    }
}

impl<A: DigestAlgorithm> PartialEq for IncrementalHasher<A> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
