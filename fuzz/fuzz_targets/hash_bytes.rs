#![no_main]

use digestrs::{Blake3, Crc32, IncrementalHasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Reference digests from a single whole-buffer pass
    let mut crc = IncrementalHasher::new(Crc32::new()).unwrap();
    let crc_expected = crc.hash_bytes(&data).unwrap();

    let mut blake = IncrementalHasher::new(Blake3::new()).unwrap();
    let blake_expected = blake.hash_bytes(&data).unwrap();

    // Verify: chunking invariance across partitions derived from the input
    let chunk_sizes = [1usize, 2, 3, 63, 64, 65, 1000];
    for chunk_size in chunk_sizes {
        let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
        hasher.init();
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.finish().unwrap(), crc_expected);

        let mut hasher = IncrementalHasher::new(Blake3::new()).unwrap();
        hasher.init();
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.finish().unwrap(), blake_expected);
    }

    // Verify: processed_bytes matches the input length
    let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
    hasher.hash_bytes(&data).unwrap();
    assert_eq!(hasher.processed_bytes(), data.len() as u64);

    // Verify: text round trip preserves equality
    let text = hasher.to_text();
    let mut restored = IncrementalHasher::new(Crc32::new()).unwrap();
    restored.from_text(&text).unwrap();
    assert_eq!(hasher.compare(&restored), std::cmp::Ordering::Equal);
});
