//! digestrs
//!
//! Incremental block hashing for Rust.
//!
//! `digestrs` turns arbitrarily-chunked byte input into fixed-size block
//! dispatches for a pluggable digest algorithm. It is designed as a small,
//! composable framework for:
//!
//! - checksumming files and streams
//! - content verification with progress bars
//! - custom block-based digest algorithms
//! - digest serialization and comparison
//!
//! The crate intentionally:
//! - does NOT define any hash algorithm's correctness
//! - does NOT manage concurrency
//! - does NOT define a network or persistence protocol
//! - does NOT retry failed I/O
//!
//! It only does one thing: **Bytes in → digest out**, with a strict
//! init → update* → final lifecycle, partial-block carry across calls,
//! windowed source drivers, normalized progress, and cooperative
//! cancellation.
//!
//! # Incremental
//!
//! ```
//! use digestrs::{Crc32, IncrementalHasher};
//!
//! fn main() -> Result<(), digestrs::HashError> {
//!     let mut hasher = IncrementalHasher::new(Crc32::new())?;
//!
//!     hasher.init();
//!     hasher.update(b"chunked ")?;
//!     hasher.update(b"input")?;
//!     let digest = hasher.finish()?;
//!
//!     println!("{} = {}", hasher.digest_name(), hasher.to_text());
//!     # let _ = digest;
//!     Ok(())
//! }
//! ```
//!
//! # Files, with progress and cancellation
//!
//! ```no_run
//! use digestrs::{Crc32, IncrementalHasher, Progress};
//!
//! fn main() -> Result<(), digestrs::HashError> {
//!     let mut hasher = IncrementalHasher::new(Crc32::new())?;
//!     hasher.on_progress(|fraction| {
//!         println!("{:>5.1}%", fraction * 100.0);
//!         Progress::Continue
//!     });
//!
//!     let digest = hasher.hash_file("data.bin")?;
//!     println!("{} bytes -> {:02x?}", hasher.processed_bytes(), digest);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use digestrs::{Blake3, IncrementalHasher, hash_async};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(mut reader: R) -> Result<(), digestrs::HashError> {
//!     let mut hasher = IncrementalHasher::new(Blake3::new())?;
//!     let digest = hash_async(&mut hasher, &mut reader).await?;
//!     println!("{}", hasher.to_text());
//!     # let _ = digest;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffered;
mod config;
mod digest;
mod error;
mod hasher;

mod buffer; // internal (thread-local read-window reuse)
mod state; // internal lifecycle guards
mod util; // internal hex helpers

mod algo;

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface (intentionally tiny)
//

pub use buffered::BufferedHasher;
pub use config::{DEFAULT_READ_BUFFER_SIZE, HasherConfig};
pub use digest::{ByteOrder, DigestAlgorithm};
pub use error::HashError;
pub use hasher::{IncrementalHasher, Progress, StreamCount};

pub use algo::Crc32;

#[cfg(feature = "algo-blake3")]
pub use algo::Blake3;

#[cfg(feature = "async-io")]
pub use async_io::{HashReader, hash_async};
