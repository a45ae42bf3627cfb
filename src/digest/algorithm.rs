//! The `DigestAlgorithm` trait - the seam between the framework and a
//! concrete hash.
//!
//! The framework owns chunking, lifecycle, sources, progress, and
//! serialization plumbing. A concrete algorithm supplies only what this
//! trait names: its block geometry, its per-block transforms, and access to
//! its digest value. Every method is required unless a sensible contract
//! default exists, so a missing transform is a compile error, not a runtime
//! one.

use crate::error::HashError;

/// Byte order of a serialized digest value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    LittleEndian,
    /// Most-significant byte first.
    BigEndian,
}

/// A concrete digest algorithm pluggable into the hashing framework.
///
/// The framework feeds the algorithm complete blocks of exactly
/// [`block_size`](DigestAlgorithm::block_size) bytes, in input order. The
/// very first complete block of each cycle arrives via
/// [`process_first_block`](DigestAlgorithm::process_first_block); every
/// later complete block via [`process_block`](DigestAlgorithm::process_block);
/// and whatever remains at finalization (0 to `block_size - 1` bytes) via
/// [`process_last_block`](DigestAlgorithm::process_last_block), which is
/// responsible for any padding or length encoding the algorithm defines.
///
/// # Contract
///
/// - `block_size()` and `output_size()` are fixed for the life of the value
///   and must be non-zero (a zero block size is rejected when the hasher is
///   constructed).
/// - `initialize()` must restore the pristine pre-first-block state; the
///   framework calls it on every `init`.
/// - `digest()` returns exactly `output_size()` bytes in the declared
///   [`byte_order`](DigestAlgorithm::byte_order). For algorithms that
///   require finalization the value is defined only after
///   `process_last_block` has run; for running-checksum-style algorithms
///   (`requires_finalization() == false`) it is readable at any time.
/// - `set_digest()` installs a deserialized value without touching the
///   running state; it is how loaded or parsed digests become comparable.
///
/// # Example
///
/// ```
/// use digestrs::{ByteOrder, DigestAlgorithm, HashError};
///
/// /// A one-byte XOR checksum with an 8-byte block.
/// #[derive(Default)]
/// struct Xor8 {
///     acc: u8,
/// }
///
/// impl DigestAlgorithm for Xor8 {
///     fn block_size(&self) -> usize {
///         8
///     }
///
///     fn output_size(&self) -> usize {
///         1
///     }
///
///     fn name(&self) -> &'static str {
///         "XOR-8"
///     }
///
///     fn byte_order(&self) -> ByteOrder {
///         ByteOrder::LittleEndian
///     }
///
///     fn requires_finalization(&self) -> bool {
///         false
///     }
///
///     fn initialize(&mut self) {
///         self.acc = 0;
///     }
///
///     fn process_first_block(&mut self, block: &[u8]) {
///         self.process_block(block);
///     }
///
///     fn process_block(&mut self, block: &[u8]) {
///         self.acc = block.iter().fold(self.acc, |acc, b| acc ^ b);
///     }
///
///     fn process_last_block(&mut self, carry: &[u8]) {
///         self.process_block(carry);
///     }
///
///     fn digest(&self) -> Vec<u8> {
///         vec![self.acc]
///     }
///
///     fn set_digest(&mut self, bytes: &[u8]) -> Result<(), HashError> {
///         self.acc = *bytes.first().ok_or(HashError::Parse {
///             message: "digest must be one byte",
///         })?;
///         Ok(())
///     }
/// }
/// ```
pub trait DigestAlgorithm {
    /// Size in bytes of the blocks the transform consumes.
    fn block_size(&self) -> usize;

    /// Size in bytes of the digest value.
    fn output_size(&self) -> usize;

    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Byte order the digest value is natively laid out in.
    fn byte_order(&self) -> ByteOrder;

    /// Whether the digest is meaningful only after finalization.
    ///
    /// `false` only for running-checksum-style algorithms whose intermediate
    /// state is always a valid, readable digest. The framework never
    /// branches on this; it is contract metadata for callers.
    fn requires_finalization(&self) -> bool {
        true
    }

    /// Restores the pristine pre-first-block state.
    fn initialize(&mut self);

    /// Transforms the first complete block of a cycle.
    fn process_first_block(&mut self, block: &[u8]);

    /// Transforms a complete block after the first.
    fn process_block(&mut self, block: &[u8]);

    /// Consumes the final partial block (0 to `block_size - 1` bytes) and
    /// performs any padding or length encoding the algorithm defines.
    fn process_last_block(&mut self, carry: &[u8]);

    /// Returns the current digest value, `output_size()` bytes in the
    /// declared byte order.
    fn digest(&self) -> Vec<u8>;

    /// Installs a deserialized digest value.
    ///
    /// `bytes` is `output_size()` bytes in the declared byte order. The
    /// running transform state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Parse`] if `bytes` is not a valid digest for
    /// this algorithm.
    fn set_digest(&mut self, bytes: &[u8]) -> Result<(), HashError>;
}
