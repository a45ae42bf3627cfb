//! Whole-message hashing - `BufferedHasher`.
//!
//! Some callers want the algorithm to see the message as one unit rather
//! than incrementally: [`BufferedHasher`] accumulates every `update` in
//! memory and runs the complete message through the block engine in a
//! single pass when `finish()` is called. The lifecycle and error contract
//! are identical to [`IncrementalHasher`](crate::IncrementalHasher).
//!
//! The accumulated message lives in memory until `finish()`; callers
//! hashing unbounded sources should use the incremental type instead.

use bytes::BytesMut;

use crate::digest::DigestAlgorithm;
use crate::error::HashError;
use crate::hasher::BlockAccumulator;
use crate::state::LifecycleState;

/// A hasher that defers all block processing to finalization.
///
/// `update` only buffers; the algorithm's transforms run inside
/// `finish()`, in input order, over the whole accumulated message.
///
/// # Example
///
/// ```
/// use digestrs::{BufferedHasher, Crc32, IncrementalHasher};
///
/// let mut buffered = BufferedHasher::new(Crc32::new())?;
/// buffered.init();
/// buffered.update(b"hello ")?;
/// buffered.update(b"world")?;
/// let digest = buffered.finish()?;
///
/// // Same digest as the incremental engine.
/// let mut incremental = IncrementalHasher::new(Crc32::new())?;
/// assert_eq!(digest, incremental.hash_bytes(b"hello world")?);
/// # Ok::<(), digestrs::HashError>(())
/// ```
pub struct BufferedHasher<A: DigestAlgorithm> {
    algorithm: A,
    state: LifecycleState,
    accumulator: BlockAccumulator,
    message: BytesMut,
}

impl<A: DigestAlgorithm> BufferedHasher<A> {
    /// Creates a buffered hasher over the given algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the algorithm declares a
    /// zero block size.
    pub fn new(algorithm: A) -> Result<Self, HashError> {
        let accumulator = BlockAccumulator::new(algorithm.block_size())?;

        Ok(Self {
            algorithm,
            state: LifecycleState::new(),
            accumulator,
            message: BytesMut::new(),
        })
    }

    /// Starts a fresh hashing cycle, discarding any buffered message.
    pub fn init(&mut self) {
        self.algorithm.initialize();
        self.accumulator.reset();
        self.state.begin_cycle();
        self.message.clear();
    }

    /// Buffers bytes for the current cycle.
    ///
    /// No block is dispatched until `finish()`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if called before `init()` or
    /// after `finish()`.
    pub fn update(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        self.state.check_update()?;
        self.message.extend_from_slice(bytes);
        self.state.record(bytes.len() as u64);
        Ok(())
    }

    /// Runs the whole buffered message through the block engine and
    /// finalizes.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if called before `init()` or a
    /// second time in one cycle.
    pub fn finish(&mut self) -> Result<Vec<u8>, HashError> {
        self.state.check_finish()?;
        let message = self.message.split().freeze();
        self.accumulator.feed(&mut self.algorithm, &message);
        self.accumulator.finalize(&mut self.algorithm);
        self.state.mark_finished();
        Ok(self.algorithm.digest())
    }

    /// Returns the current digest value.
    pub fn digest(&self) -> Vec<u8> {
        self.algorithm.digest()
    }

    /// Returns the bytes buffered in the current cycle.
    pub fn processed_bytes(&self) -> u64 {
        self.state.processed_bytes()
    }

    /// Returns true once a cycle has begun.
    pub fn initialized(&self) -> bool {
        self.state.initialized()
    }

    /// Returns true once the current cycle has been finalized.
    pub fn finalized(&self) -> bool {
        self.state.finalized()
    }

    /// Returns a reference to the algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }
}
