//! Async file hashing with tokio.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- /path/to/file

use std::env;

use digestrs::{Crc32, IncrementalHasher, hash_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Hashing file (async): {}", path);

    let file = tokio::fs::File::open(&path).await?;
    let mut reader = file.compat();

    let mut hasher = IncrementalHasher::new(Crc32::new())?;
    hash_async(&mut hasher, &mut reader).await?;

    println!(
        "{}: {} ({} bytes hashed)",
        hasher.digest_name(),
        hasher.to_text(),
        hasher.processed_bytes()
    );

    Ok(())
}
