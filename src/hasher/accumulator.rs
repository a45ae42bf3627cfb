//! The block accumulation engine.
//!
//! Converts a stream of variable-size input chunks into a stream of
//! fixed-size block dispatches. Bytes that do not yet fill a block are
//! carried across calls in an owned buffer; the first complete block of a
//! cycle is routed to the algorithm's first-block handler, and whatever
//! remains at finalization goes to its last-block handler.

use crate::digest::DigestAlgorithm;
use crate::error::HashError;

/// Splits arbitrarily-chunked input into fixed-size block dispatches.
///
/// Invariant: the carry buffer holds fewer than `block_size` bytes after
/// every call returns; a filled carry is always dispatched before returning.
#[derive(Debug)]
pub(crate) struct BlockAccumulator {
    carry: Vec<u8>,
    block_size: usize,
    first_block: bool,
}

impl BlockAccumulator {
    /// Creates an accumulator for the given block size.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if `block_size` is zero.
    pub(crate) fn new(block_size: usize) -> Result<Self, HashError> {
        if block_size == 0 {
            return Err(HashError::InvalidConfig {
                message: "algorithm block size must be non-zero",
            });
        }

        Ok(Self {
            carry: Vec::with_capacity(block_size),
            block_size,
            first_block: true,
        })
    }

    /// Clears the carry and re-arms the first-block routing.
    pub(crate) fn reset(&mut self) {
        self.carry.clear();
        self.first_block = true;
    }

    /// Returns the number of carried bytes awaiting a full block.
    pub(crate) fn carry_len(&self) -> usize {
        self.carry.len()
    }

    /// Feeds an input chunk, dispatching every complete block to the
    /// algorithm and carrying the remainder.
    ///
    /// Empty input returns immediately with no dispatch and no state
    /// change. The walk over the remainder is a loop, not a recursion, so
    /// adversarially small block sizes cannot exhaust the stack.
    pub(crate) fn feed<A: DigestAlgorithm>(&mut self, algorithm: &mut A, mut input: &[u8]) {
        if input.is_empty() {
            return;
        }

        // Complete a held partial block first.
        if !self.carry.is_empty() {
            let need = self.block_size - self.carry.len();
            if input.len() < need {
                self.carry.extend_from_slice(input);
                return;
            }

            self.carry.extend_from_slice(&input[..need]);
            if self.first_block {
                algorithm.process_first_block(&self.carry);
            } else {
                algorithm.process_block(&self.carry);
            }
            self.first_block = false;
            self.carry.clear();
            input = &input[need..];
        }

        // Walk the rest in block-size strides.
        let mut blocks = input.chunks_exact(self.block_size);
        for block in blocks.by_ref() {
            if self.first_block {
                algorithm.process_first_block(block);
                self.first_block = false;
            } else {
                algorithm.process_block(block);
            }
        }

        self.carry.extend_from_slice(blocks.remainder());
    }

    /// Drains the carry into the algorithm's last-block handler.
    ///
    /// The carry (0 to `block_size - 1` bytes) is considered consumed
    /// afterwards; the accumulator is inert until the next reset.
    pub(crate) fn finalize<A: DigestAlgorithm>(&mut self, algorithm: &mut A) {
        algorithm.process_last_block(&self.carry);
        self.carry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::testing::Recorder;

    fn recorder() -> (Recorder, BlockAccumulator) {
        let mut algorithm = Recorder::default();
        algorithm.initialize();
        let accumulator = BlockAccumulator::new(algorithm.block_size()).unwrap();
        (algorithm, accumulator)
    }

    #[test]
    fn test_zero_block_size_rejected() {
        assert!(BlockAccumulator::new(0).is_err());
    }

    #[test]
    fn test_empty_feed_is_noop() {
        let (mut algorithm, mut accumulator) = recorder();
        accumulator.feed(&mut algorithm, b"");
        assert!(algorithm.calls.is_empty());
        assert_eq!(accumulator.carry_len(), 0);
    }

    #[test]
    fn test_carry_trace_3_4_3() {
        // Block size 4, "ABCDEFGHIJ" fed as 3 + 4 + 3 bytes.
        let (mut algorithm, mut accumulator) = recorder();

        accumulator.feed(&mut algorithm, b"ABC");
        assert!(algorithm.calls.is_empty());
        assert_eq!(accumulator.carry_len(), 3);

        accumulator.feed(&mut algorithm, b"DEFG");
        assert_eq!(algorithm.calls, vec!["first:ABCD"]);
        assert_eq!(accumulator.carry_len(), 3);

        accumulator.feed(&mut algorithm, b"HIJ");
        assert_eq!(algorithm.calls, vec!["first:ABCD", "block:EFGH"]);
        assert_eq!(accumulator.carry_len(), 2);

        accumulator.finalize(&mut algorithm);
        assert_eq!(
            algorithm.calls,
            vec!["first:ABCD", "block:EFGH", "last:IJ:2"]
        );
        assert_eq!(accumulator.carry_len(), 0);
    }

    #[test]
    fn test_boundary_exact_leaves_empty_carry() {
        let (mut algorithm, mut accumulator) = recorder();
        accumulator.feed(&mut algorithm, b"ABCDEFGH");
        assert_eq!(algorithm.calls, vec!["first:ABCD", "block:EFGH"]);
        assert_eq!(accumulator.carry_len(), 0);

        accumulator.finalize(&mut algorithm);
        assert_eq!(
            algorithm.calls,
            vec!["first:ABCD", "block:EFGH", "last::0"]
        );
    }

    #[test]
    fn test_completed_carry_remainder_is_fully_processed() {
        // 1 carried byte + 11 new bytes: the remainder after completing the
        // carried block spans two more whole blocks.
        let (mut algorithm, mut accumulator) = recorder();
        accumulator.feed(&mut algorithm, b"A");
        accumulator.feed(&mut algorithm, b"BCDEFGHIJKL");
        assert_eq!(
            algorithm.calls,
            vec!["first:ABCD", "block:EFGH", "block:IJKL"]
        );
        assert_eq!(accumulator.carry_len(), 0);
    }

    #[test]
    fn test_first_block_via_tiny_chunks() {
        // The first dispatch goes through the first-block handler even when
        // it is produced by completing a carried partial block.
        let (mut algorithm, mut accumulator) = recorder();
        for byte in b"WXYZ" {
            accumulator.feed(&mut algorithm, &[*byte]);
        }
        assert_eq!(algorithm.calls, vec!["first:WXYZ"]);
    }

    #[test]
    fn test_reset_rearms_first_block() {
        let (mut algorithm, mut accumulator) = recorder();
        accumulator.feed(&mut algorithm, b"ABCDEF");
        accumulator.reset();
        assert_eq!(accumulator.carry_len(), 0);

        algorithm.calls.clear();
        accumulator.feed(&mut algorithm, b"GHIJ");
        assert_eq!(algorithm.calls, vec!["first:GHIJ"]);
    }

    #[test]
    fn test_finalize_empty_carry() {
        let (mut algorithm, mut accumulator) = recorder();
        accumulator.finalize(&mut algorithm);
        assert_eq!(algorithm.calls, vec!["last::0"]);
    }
}
