//! BLAKE3 as a pluggable digest algorithm.
//!
//! Adapter over the `blake3` crate. The inner hasher is itself
//! incremental, so blocks dispatched by the framework are forwarded as-is
//! and the digest matches one-shot `blake3::hash` for the same bytes.

use crate::digest::{ByteOrder, DigestAlgorithm};
use crate::error::HashError;

/// BLAKE3 digest algorithm (32-byte output, 64-byte blocks).
///
/// # Example
///
/// ```
/// use digestrs::{Blake3, IncrementalHasher};
///
/// let mut hasher = IncrementalHasher::new(Blake3::new())?;
/// let digest = hasher.hash_bytes(b"hello world")?;
/// assert_eq!(digest, blake3::hash(b"hello world").as_bytes().to_vec());
/// # Ok::<(), digestrs::HashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Blake3 {
    inner: blake3::Hasher,
    output: [u8; 32],
}

impl Blake3 {
    /// Creates a BLAKE3 algorithm in its initial state.
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
            output: [0u8; 32],
        }
    }

    /// Creates a keyed BLAKE3 algorithm.
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            inner: blake3::Hasher::new_keyed(key),
            output: [0u8; 32],
        }
    }
}

impl Default for Blake3 {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestAlgorithm for Blake3 {
    fn block_size(&self) -> usize {
        64
    }

    fn output_size(&self) -> usize {
        32
    }

    fn name(&self) -> &'static str {
        "BLAKE3"
    }

    fn byte_order(&self) -> ByteOrder {
        ByteOrder::LittleEndian
    }

    fn initialize(&mut self) {
        self.inner.reset();
        self.output = [0u8; 32];
    }

    fn process_first_block(&mut self, block: &[u8]) {
        self.inner.update(block);
    }

    fn process_block(&mut self, block: &[u8]) {
        self.inner.update(block);
    }

    fn process_last_block(&mut self, carry: &[u8]) {
        self.inner.update(carry);
        self.output = *self.inner.finalize().as_bytes();
    }

    fn digest(&self) -> Vec<u8> {
        self.output.to_vec()
    }

    fn set_digest(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        self.output = bytes.try_into().map_err(|_| HashError::Parse {
            message: "BLAKE3 digest must be 32 bytes",
        })?;
        Ok(())
    }
}
