//! Async reader adapter for hashing.
//!
//! Uses `futures_io::AsyncRead`, which is runtime-agnostic: works with
//! tokio (via `tokio-util`'s compat layer), async-std, smol, or any
//! futures-compatible runtime.
//!
//! Progress normalization is not offered on the async path - there is no
//! seekable total to normalize against. These are convenience adapters
//! over the synchronous engine, which stays the source of truth for
//! lifecycle and chunking behavior.

use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::Buffer;
use crate::digest::DigestAlgorithm;
use crate::error::HashError;
use crate::hasher::IncrementalHasher;

pin_project! {
    /// An async reader that hashes every byte read through it.
    ///
    /// Bytes pass through unchanged; the wrapped hasher observes them in
    /// read order. Call [`HashReader::finish`] when the stream is done to
    /// finalize and take the digest.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use digestrs::{Crc32, HashReader, IncrementalHasher};
    /// use futures_util::io::AsyncReadExt;
    ///
    /// async fn demo<R: futures_io::AsyncRead + Unpin>(reader: R) -> Result<(), digestrs::HashError> {
    ///     let hasher = IncrementalHasher::new(Crc32::new())?;
    ///     let mut reader = HashReader::new(reader, hasher);
    ///
    ///     let mut sink = Vec::new();
    ///     reader.read_to_end(&mut sink).await?;
    ///
    ///     let digest = reader.finish()?;
    ///     println!("{} bytes -> {:02x?}", sink.len(), digest);
    ///     Ok(())
    /// }
    /// ```
    pub struct HashReader<R, A>
    where
        A: DigestAlgorithm,
    {
        #[pin]
        reader: R,
        hasher: IncrementalHasher<A>,
    }
}

impl<R, A: DigestAlgorithm> HashReader<R, A> {
    /// Wraps a reader, starting a fresh hashing cycle on the given hasher.
    pub fn new(reader: R, mut hasher: IncrementalHasher<A>) -> Self {
        hasher.init();
        Self { reader, hasher }
    }

    /// Returns the wrapped hasher (for observables like
    /// `processed_bytes`).
    pub fn hasher(&self) -> &IncrementalHasher<A> {
        &self.hasher
    }

    /// Finalizes the hashing cycle and returns the digest, dropping the
    /// reader.
    pub fn finish(self) -> Result<Vec<u8>, HashError> {
        let Self { mut hasher, .. } = self;
        hasher.finish()
    }

    /// Splits back into the reader and the (not yet finalized) hasher.
    pub fn into_parts(self) -> (R, IncrementalHasher<A>) {
        let Self { reader, hasher } = self;
        (reader, hasher)
    }
}

impl<R: AsyncRead, A: DigestAlgorithm> AsyncRead for HashReader<R, A> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.project();
        let n = ready!(this.reader.poll_read(cx, buf))?;
        if n > 0 {
            this.hasher.update(&buf[..n]).map_err(io::Error::other)?;
        }
        Poll::Ready(Ok(n))
    }
}

/// Hashes an async reader from its current position to the end.
///
/// Runs a full init -> update* -> final cycle, reading in
/// `read_buffer_size` windows.
///
/// # Errors
///
/// Returns [`HashError::Io`] unchanged from the reader; the instance state
/// after a mid-stream failure is undefined and the hasher should be
/// re-initialized before reuse.
///
/// # Example
///
/// ```
/// use digestrs::{Crc32, IncrementalHasher, hash_async};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), digestrs::HashError> {
/// let mut hasher = IncrementalHasher::new(Crc32::new())?;
/// let digest = hash_async(&mut hasher, &mut &b"123456789"[..]).await?;
/// assert_eq!(hasher.to_text(), "cbf43926");
/// # Ok(())
/// # }
/// ```
pub async fn hash_async<R, A>(
    hasher: &mut IncrementalHasher<A>,
    reader: &mut R,
) -> Result<Vec<u8>, HashError>
where
    R: AsyncRead + Unpin,
    A: DigestAlgorithm,
{
    hasher.config().validate()?;
    let window = hasher.config().read_buffer_size();
    let mut buffer = Buffer::take(window);

    hasher.init();
    loop {
        let n = poll_fn(|cx| Pin::new(&mut *reader).poll_read(cx, buffer.as_mut_slice())).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer.as_slice()[..n])?;
    }
    hasher.finish()
}
