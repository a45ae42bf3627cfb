#![no_main]

use std::io::Cursor;

use digestrs::{ByteOrder, Crc32, HasherConfig, IncrementalHasher, StreamCount};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, u16, u8)| {
    let (data, window, skip) = input;
    let window = (window as usize).max(1);
    let skip = (skip as u64).min(data.len() as u64);

    let mut reference = IncrementalHasher::new(Crc32::new()).unwrap();
    let expected_all = reference.hash_bytes(&data).unwrap();

    let config = HasherConfig::new(window).unwrap();

    // StreamCount::All must match the whole-buffer digest for any window size
    let mut hasher = IncrementalHasher::with_config(Crc32::new(), config).unwrap();
    let mut source = Cursor::new(data.clone());
    assert_eq!(
        hasher.hash_stream(&mut source, StreamCount::All).unwrap(),
        expected_all
    );
    assert_eq!(hasher.processed_bytes(), data.len() as u64);

    // StreamCount::ToEnd from an arbitrary position must match the suffix
    let mut suffix = IncrementalHasher::new(Crc32::new()).unwrap();
    let expected_suffix = suffix.hash_bytes(&data[skip as usize..]).unwrap();

    let mut hasher = IncrementalHasher::with_config(Crc32::new(), config).unwrap();
    let mut source = Cursor::new(data.clone());
    source.set_position(skip);
    assert_eq!(
        hasher.hash_stream(&mut source, StreamCount::ToEnd).unwrap(),
        expected_suffix
    );

    // Serialization round trip in both byte orders
    for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        let mut wire = Vec::new();
        hasher.save_to_stream(&mut wire, order).unwrap();
        let mut restored = IncrementalHasher::new(Crc32::new()).unwrap();
        restored.load_from_stream(&mut wire.as_slice(), order).unwrap();
        assert_eq!(hasher.compare(&restored), std::cmp::Ordering::Equal);
    }
});
