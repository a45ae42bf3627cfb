//! CRC-32 (IEEE 802.3) as a pluggable digest algorithm.
//!
//! A running checksum: the intermediate state is always a valid digest, so
//! `requires_finalization()` is `false` and callers may read the value
//! mid-stream. The reflected polynomial 0xEDB88320 with all-ones initial
//! value and final inversion matches zlib, PNG, and gzip.

use crate::digest::{ByteOrder, DigestAlgorithm};
use crate::error::HashError;

/// Compile-time generation of the byte-indexed remainder table.
const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

const CRC32_TABLE: [u32; 256] = crc32_table();

/// Block size fed by the framework. CRC has no inherent block; this is the
/// dispatch granularity.
const CRC32_BLOCK_SIZE: usize = 64;

/// CRC-32 (IEEE) digest algorithm.
///
/// # Example
///
/// ```
/// use digestrs::{Crc32, IncrementalHasher};
///
/// let mut hasher = IncrementalHasher::new(Crc32::new())?;
/// let digest = hasher.hash_bytes(b"123456789")?;
/// assert_eq!(hasher.to_text(), "cbf43926");
/// assert_eq!(digest, vec![0xcb, 0xf4, 0x39, 0x26]);
/// # Ok::<(), digestrs::HashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Creates a CRC-32 algorithm in its initial state.
    pub fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    fn absorb(&mut self, bytes: &[u8]) {
        for byte in bytes {
            let index = (self.state ^ *byte as u32) & 0xFF;
            self.state = (self.state >> 8) ^ CRC32_TABLE[index as usize];
        }
    }

    /// Returns the checksum of the bytes absorbed so far.
    pub fn value(&self) -> u32 {
        !self.state
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestAlgorithm for Crc32 {
    fn block_size(&self) -> usize {
        CRC32_BLOCK_SIZE
    }

    fn output_size(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "CRC-32"
    }

    fn byte_order(&self) -> ByteOrder {
        ByteOrder::BigEndian
    }

    fn requires_finalization(&self) -> bool {
        false
    }

    fn initialize(&mut self) {
        self.state = 0xFFFF_FFFF;
    }

    fn process_first_block(&mut self, block: &[u8]) {
        self.absorb(block);
    }

    fn process_block(&mut self, block: &[u8]) {
        self.absorb(block);
    }

    fn process_last_block(&mut self, carry: &[u8]) {
        self.absorb(carry);
    }

    fn digest(&self) -> Vec<u8> {
        self.value().to_be_bytes().to_vec()
    }

    fn set_digest(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| HashError::Parse {
            message: "CRC-32 digest must be 4 bytes",
        })?;
        self.state = !u32::from_be_bytes(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::IncrementalHasher;

    #[test]
    fn test_check_value() {
        // The CRC catalogue check input.
        let mut crc = Crc32::new();
        crc.absorb(b"123456789");
        assert_eq!(crc.value(), 0xCBF4_3926);
    }

    #[test]
    fn test_empty_input() {
        let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
        hasher.hash_bytes(b"").unwrap();
        assert_eq!(hasher.algorithm().value(), 0);
    }

    #[test]
    fn test_chunked_matches_one_shot() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();

        let mut one_shot = IncrementalHasher::new(Crc32::new()).unwrap();
        let expected = one_shot.hash_bytes(&data).unwrap();

        let mut chunked = IncrementalHasher::new(Crc32::new()).unwrap();
        chunked.init();
        for chunk in data.chunks(7) {
            chunked.update(chunk).unwrap();
        }
        assert_eq!(chunked.finish().unwrap(), expected);
    }

    #[test]
    fn test_running_digest_is_readable_mid_stream() {
        let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
        assert!(!hasher.algorithm().requires_finalization());

        hasher.init();
        hasher.update(&[0xAB; 64]).unwrap();

        // One full block has been dispatched; the digest already reflects it.
        let mut reference = Crc32::new();
        reference.absorb(&[0xAB; 64]);
        assert_eq!(hasher.digest(), reference.value().to_be_bytes().to_vec());
    }

    #[test]
    fn test_set_digest_round_trip() {
        let mut a = Crc32::new();
        a.absorb(b"123456789");

        let mut b = Crc32::new();
        b.set_digest(&a.digest()).unwrap();
        assert_eq!(b.value(), a.value());

        assert!(b.set_digest(b"\x01\x02").is_err());
    }
}
