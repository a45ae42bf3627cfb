//! The generic hashing engine - `IncrementalHasher` with
//! `init()`/`update()`/`finish()` API.
//!
//! This module implements the strict init -> update* -> final lifecycle
//! around the block accumulation engine:
//!
//! - [`IncrementalHasher`] - Composes an algorithm, lifecycle state, carry
//!   buffer, configuration, and an optional progress callback
//! - `init()` - Starts (or restarts) a hashing cycle
//! - `update()` - Feeds data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finish()` - Drains the carried partial block and finalizes
//!
//! # Example
//!
//! ```
//! use digestrs::{Crc32, IncrementalHasher};
//!
//! let mut hasher = IncrementalHasher::new(Crc32::new())?;
//!
//! hasher.init();
//! hasher.update(b"first")?;
//! hasher.update(b"second")?;
//! let digest = hasher.finish()?;
//!
//! assert_eq!(digest.len(), hasher.digest_size());
//! # Ok::<(), digestrs::HashError>(())
//! ```

use crate::config::HasherConfig;
use crate::digest::{ByteOrder, DigestAlgorithm};
use crate::error::HashError;
use crate::hasher::BlockAccumulator;
use crate::state::LifecycleState;

/// Decision returned by a progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep issuing read windows.
    Continue,
    /// Stop issuing read windows after the current one is applied.
    Cancel,
}

/// Progress callback type: receives a fraction in `[0.0, 1.0]`.
type ProgressCallback = Box<dyn FnMut(f64) -> Progress>;

/// A generic incremental hasher over a pluggable digest algorithm.
///
/// `IncrementalHasher` enforces the lifecycle, carries partial blocks
/// across `update` calls, and dispatches complete blocks to the algorithm.
/// The driver methods (`hash_bytes`, `hash_stream`, `hash_file`, ...) are
/// convenience wrappers that run a full cycle internally.
///
/// # Lifecycle
///
/// - `init()` is always legal and starts a fresh cycle from any state
/// - `update()` and `finish()` are legal only between `init()` and the
///   cycle's single `finish()`; violations surface
///   [`HashError::InvalidState`] and mutate nothing
/// - After `finish()` the digest is read-only until the next `init()`
///
/// # Determinism
///
/// Identical byte streams produce identical digests, regardless of how the
/// bytes are partitioned across `update` calls.
///
/// # Concurrency
///
/// A single instance is not safe for concurrent use; callers serialize
/// access or use one instance per hashing task.
pub struct IncrementalHasher<A: DigestAlgorithm> {
    algorithm: A,
    state: LifecycleState,
    accumulator: BlockAccumulator,
    config: HasherConfig,
    on_progress: Option<ProgressCallback>,
    cancel_requested: bool,
}

impl<A: DigestAlgorithm> IncrementalHasher<A> {
    /// Creates a hasher over the given algorithm with default configuration.
    ///
    /// The carry buffer is allocated here, once the algorithm's block size
    /// is known, and lives as long as the hasher.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the algorithm declares a
    /// zero block size.
    pub fn new(algorithm: A) -> Result<Self, HashError> {
        Self::with_config(algorithm, HasherConfig::default())
    }

    /// Creates a hasher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the algorithm declares a
    /// zero block size or the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::{Crc32, HasherConfig, IncrementalHasher};
    ///
    /// let config = HasherConfig::new(64 * 1024)?;
    /// let hasher = IncrementalHasher::with_config(Crc32::new(), config)?;
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn with_config(algorithm: A, config: HasherConfig) -> Result<Self, HashError> {
        config.validate()?;
        let accumulator = BlockAccumulator::new(algorithm.block_size())?;

        Ok(Self {
            algorithm,
            state: LifecycleState::new(),
            accumulator,
            config,
            on_progress: None,
            cancel_requested: false,
        })
    }

    /// Starts a fresh hashing cycle.
    ///
    /// Always legal, from any state: resets the algorithm, clears the
    /// carry, re-arms first-block routing, zeroes the processed-byte
    /// counter, and clears any pending cancellation.
    pub fn init(&mut self) {
        self.algorithm.initialize();
        self.accumulator.reset();
        self.state.begin_cycle();
        self.cancel_requested = false;
    }

    /// Feeds bytes into the current cycle.
    ///
    /// Accepts any chunk size, including empty input (a legal no-op).
    /// Complete blocks are dispatched to the algorithm as they fill; the
    /// rest is carried until the next call or `finish()`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if called before `init()` or
    /// after `finish()`. Nothing is mutated on failure.
    pub fn update(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        self.state.check_update()?;
        self.accumulator.feed(&mut self.algorithm, bytes);
        self.state.record(bytes.len() as u64);
        Ok(())
    }

    /// Finalizes the current cycle and returns the digest.
    ///
    /// Drains the carried partial block (possibly empty) into the
    /// algorithm's last-block handler, then transitions to the finalized
    /// state. Legal exactly once per cycle.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if called before `init()` or a
    /// second time in one cycle. Nothing is mutated on failure.
    pub fn finish(&mut self) -> Result<Vec<u8>, HashError> {
        self.finish_with(&[])
    }

    /// Feeds optional trailing bytes, then finalizes.
    ///
    /// Equivalent to `update(bytes)` followed by `finish()`, under the same
    /// preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] under the same conditions as
    /// [`IncrementalHasher::finish`].
    pub fn finish_with(&mut self, bytes: &[u8]) -> Result<Vec<u8>, HashError> {
        self.state.check_finish()?;
        self.accumulator.feed(&mut self.algorithm, bytes);
        self.state.record(bytes.len() as u64);
        self.accumulator.finalize(&mut self.algorithm);
        self.state.mark_finished();
        Ok(self.algorithm.digest())
    }

    /// Registers the progress callback.
    ///
    /// The callback runs synchronously on the calling thread after every
    /// read window a driver issues, receiving a fraction clamped to
    /// `[0.0, 1.0]`. Returning [`Progress::Cancel`] requests cooperative
    /// cancellation: the driver stops issuing windows after the current one
    /// is applied. Multiple listeners compose externally in one closure.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::{Crc32, IncrementalHasher, Progress};
    ///
    /// let mut hasher = IncrementalHasher::new(Crc32::new())?;
    /// hasher.on_progress(|fraction| {
    ///     println!("{:.0}%", fraction * 100.0);
    ///     Progress::Continue
    /// });
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn on_progress<F>(&mut self, callback: F)
    where
        F: FnMut(f64) -> Progress + 'static,
    {
        self.on_progress = Some(Box::new(callback));
    }

    /// Removes the progress callback.
    pub fn clear_progress(&mut self) {
        self.on_progress = None;
    }

    /// Returns the current digest value.
    ///
    /// For algorithms that require finalization the value is defined only
    /// after `finish()`; for running-checksum-style algorithms it reflects
    /// the blocks dispatched so far (carried bytes enter at the next block
    /// boundary or at `finish()`).
    pub fn digest(&self) -> Vec<u8> {
        self.algorithm.digest()
    }

    /// Returns the bytes processed in the current cycle.
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

    /// Returns true if the last driver run was cut short by the progress
    /// callback. Cleared on `init()`.
    pub fn cancelled(&self) -> bool {
        self.cancel_requested
    }

    /// Returns the digest size in bytes.
    pub fn digest_size(&self) -> usize {
        self.algorithm.output_size()
    }

    /// Returns the algorithm name.
    pub fn digest_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Returns the digest's declared byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.algorithm.byte_order()
    }

    /// Returns the algorithm's block size in bytes.
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Returns a reference to the algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Returns the driver configuration.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Replaces the driver configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if the configuration is
    /// invalid; the previous configuration is kept.
    pub fn set_config(&mut self, config: HasherConfig) -> Result<(), HashError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Reports a progress fraction through the callback, if one is set.
    ///
    /// The fraction is clamped to `[0.0, 1.0]`; a `Cancel` return latches
    /// the cancellation flag, observed by the driver loop.
    pub(super) fn report_progress(&mut self, fraction: f64) {
        if let Some(callback) = self.on_progress.as_mut() {
            if callback(fraction.clamp(0.0, 1.0)) == Progress::Cancel {
                self.cancel_requested = true;
            }
        }
    }

    /// Mutable algorithm access for deserialization paths.
    pub(super) fn algorithm_mut(&mut self) -> &mut A {
        &mut self.algorithm
    }

    /// Carried bytes awaiting a full block.
    #[cfg(test)]
    pub(crate) fn carry_len(&self) -> usize {
        self.accumulator.carry_len()
    }
}
