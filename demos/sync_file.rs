//! File hashing example with progress reporting.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;

use digestrs::{Crc32, HasherConfig, IncrementalHasher, Progress};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Hashing file: {}\n", path);

    // Small windows so short files still show several reports
    let config = HasherConfig::new(64 * 1024)?;
    let mut hasher = IncrementalHasher::with_config(Crc32::new(), config)?;

    hasher.on_progress(|fraction| {
        println!("  {:>5.1}%", fraction * 100.0);
        // Return Progress::Cancel here to stop after the current window.
        Progress::Continue
    });

    let digest = hasher.hash_file(&path)?;

    println!(
        "\n{}: {} ({} bytes hashed)",
        hasher.digest_name(),
        hasher.to_text(),
        hasher.processed_bytes()
    );
    println!("raw digest: {:02x?}", digest);

    Ok(())
}
