//! Async hashing support.
//!
//! This module provides asynchronous hashing using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//!
//! - [`HashReader`] - Wraps an async reader and hashes everything read
//!   through it
//! - [`hash_async`] - Drives an async reader from its current position to
//!   the end
//!
//! This module requires the `async-io` feature to be enabled.

mod reader;

pub use reader::{HashReader, hash_async};
