//! Basic incremental hashing example.
//!
//! Run with:
//!     cargo run --example sync_basic

use digestrs::{Crc32, IncrementalHasher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut hasher = IncrementalHasher::new(Crc32::new())?;

    // Full control: explicit lifecycle
    hasher.init();
    hasher.update(b"hello ")?;
    hasher.update(b"world")?;
    hasher.finish()?;
    println!("{} of \"hello world\" = {}", hasher.digest_name(), hasher.to_text());

    // Convenience: one call per message
    let digest = hasher.hash_bytes(b"hello world")?;
    println!("macro method agrees: {:02x?}", digest);

    // Text hashing
    hasher.hash_str("hello world")?;
    println!("hash_str agrees:     {}", hasher.to_text());

    #[cfg(feature = "algo-blake3")]
    {
        use digestrs::Blake3;

        let mut blake = IncrementalHasher::new(Blake3::new())?;
        blake.hash_bytes(b"hello world")?;
        println!("{} = {}", blake.digest_name(), blake.to_text());
    }

    Ok(())
}
