//! Source drivers - the macro layer over the hashing engine.
//!
//! These methods run a full init -> update* -> final cycle over a byte
//! source:
//!
//! - [`IncrementalHasher::hash_bytes`] - In-memory buffers
//! - [`IncrementalHasher::hash_stream`] - Seekable streams, windowed
//! - [`IncrementalHasher::hash_file`] - Files, windowed
//! - [`IncrementalHasher::hash_str`] / [`IncrementalHasher::hash_utf16`] -
//!   Text adapters
//!
//! Streams are consumed in fixed-size read windows (see
//! [`HasherConfig::read_buffer_size`](crate::HasherConfig::read_buffer_size)).
//! After every window the progress callback, if set, receives the
//! normalized fraction of bytes consumed and may cancel the run; the
//! window already read is still applied, and finalization always runs
//! exactly once.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::buffer::Buffer;
use crate::digest::DigestAlgorithm;
use crate::error::HashError;
use crate::hasher::IncrementalHasher;

/// How much of a stream a driver consumes.
///
/// Hashing always proceeds forward from wherever the variant says to
/// start; the stream is left positioned after the last byte consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamCount {
    /// Rewind the source to its start and hash all of it.
    All,
    /// Hash from the source's current position to its end.
    ToEnd,
    /// Hash exactly this many bytes from the current position, even if
    /// more are available.
    Bytes(u64),
}

impl<A: DigestAlgorithm> IncrementalHasher<A> {
    /// Hashes an in-memory buffer in one full cycle.
    ///
    /// With `buffer_progress` disabled (the default) the buffer is
    /// processed in a single pass with no windowing and no callbacks. With
    /// it enabled, the buffer is wrapped as a bounded random-access source
    /// and driven through [`IncrementalHasher::hash_stream`].
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::{Crc32, IncrementalHasher};
    ///
    /// let mut hasher = IncrementalHasher::new(Crc32::new())?;
    /// let digest = hasher.hash_bytes(b"hello world")?;
    /// assert_eq!(digest.len(), 4);
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn hash_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>, HashError> {
        if self.config().buffer_progress() {
            let mut cursor = Cursor::new(data);
            return self.hash_stream(&mut cursor, StreamCount::ToEnd);
        }

        self.init();
        self.finish_with(data)
    }

    /// Hashes UTF-8 text in one full cycle.
    ///
    /// Thin adapter over [`IncrementalHasher::hash_bytes`] using the
    /// string's UTF-8 bytes.
    pub fn hash_str(&mut self, text: &str) -> Result<Vec<u8>, HashError> {
        self.hash_bytes(text.as_bytes())
    }

    /// Hashes text as UTF-16LE code-unit bytes in one full cycle.
    ///
    /// Thin adapter over [`IncrementalHasher::hash_bytes`]; each code unit
    /// contributes two bytes, least-significant first.
    pub fn hash_utf16(&mut self, text: &str) -> Result<Vec<u8>, HashError> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        self.hash_bytes(&bytes)
    }

    /// Hashes a seekable stream in one full cycle.
    ///
    /// Reads in `read_buffer_size` windows until a window comes back short
    /// (end of available data), the requested byte count is consumed, or
    /// the progress callback cancels the run. Every window read is passed
    /// to `update`; finalization runs exactly once, including after
    /// cancellation.
    ///
    /// Progress, when a callback is set: an initial `0.0` before the first
    /// read, `consumed / total` after every window, and a single `1.0`
    /// when there is nothing to consume.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Io`] unchanged from the source; the instance
    /// state after a mid-stream failure is undefined and the hasher should
    /// be re-initialized before reuse. Returns
    /// [`HashError::InvalidConfig`] if the configured window size is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use digestrs::{Crc32, IncrementalHasher, StreamCount};
    ///
    /// let mut hasher = IncrementalHasher::new(Crc32::new())?;
    /// let mut source = Cursor::new(b"some data".to_vec());
    /// let digest = hasher.hash_stream(&mut source, StreamCount::All)?;
    /// assert_eq!(digest, hasher.hash_bytes(b"some data")?);
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn hash_stream<S: Read + Seek>(
        &mut self,
        source: &mut S,
        count: StreamCount,
    ) -> Result<Vec<u8>, HashError> {
        self.config().validate()?;

        let total = match count {
            StreamCount::All => {
                let end = source.seek(SeekFrom::End(0))?;
                source.seek(SeekFrom::Start(0))?;
                end
            }
            StreamCount::ToEnd => {
                let position = source.stream_position()?;
                let end = source.seek(SeekFrom::End(0))?;
                source.seek(SeekFrom::Start(position))?;
                end - position
            }
            StreamCount::Bytes(n) => n,
        };

        self.init();
        self.report_progress(0.0);

        if total == 0 {
            self.report_progress(1.0);
            return self.finish();
        }

        let window = self.config().read_buffer_size();
        let mut buffer = Buffer::take(window);
        let mut consumed = 0u64;

        while consumed < total && !self.cancelled() {
            let want = (total - consumed).min(window as u64) as usize;
            let got = fill_window(source, &mut buffer.as_mut_slice()[..want])?;
            if got == 0 {
                break;
            }

            self.update(&buffer.as_slice()[..got])?;
            consumed += got as u64;
            self.report_progress(consumed as f64 / total as f64);

            if got < want {
                break;
            }
        }

        self.finish()
    }

    /// Hashes a file in one full cycle.
    ///
    /// Opens the file read-only, rewinds it, and delegates to
    /// [`IncrementalHasher::hash_stream`] with [`StreamCount::All`]. The
    /// handle is released on every exit path: success, cancellation, or
    /// error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use digestrs::{Crc32, IncrementalHasher};
    ///
    /// let mut hasher = IncrementalHasher::new(Crc32::new())?;
    /// let digest = hasher.hash_file("data.bin")?;
    /// println!("{} bytes hashed", hasher.processed_bytes());
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn hash_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<u8>, HashError> {
        let mut file = File::open(path)?;
        self.hash_stream(&mut file, StreamCount::All)
    }
}

/// Reads until `buf` is full or the source is exhausted.
///
/// A short `read` mid-stream is not end-of-data; only `Ok(0)` is.
fn fill_window<S: Read>(source: &mut S, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HasherConfig;
    use crate::hasher::Progress;
    use crate::hasher::testing::Recorder;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hasher() -> IncrementalHasher<Recorder> {
        IncrementalHasher::new(Recorder::default()).unwrap()
    }

    fn windowed(window: usize) -> IncrementalHasher<Recorder> {
        let config = HasherConfig::new(window).unwrap();
        IncrementalHasher::with_config(Recorder::default(), config).unwrap()
    }

    #[test]
    fn test_hash_bytes_without_progress_skips_windowing() {
        let mut h = hasher();
        h.hash_bytes(b"ABCDEFGHIJ").unwrap();
        assert_eq!(
            h.algorithm().calls,
            vec!["first:ABCD", "block:EFGH", "last:IJ:2"]
        );
        assert_eq!(h.processed_bytes(), 10);
        assert!(h.finalized());
    }

    #[test]
    fn test_hash_stream_matches_hash_bytes_trace() {
        let mut h = windowed(3);
        let mut source = Cursor::new(b"ABCDEFGHIJ".to_vec());
        h.hash_stream(&mut source, StreamCount::All).unwrap();

        let mut direct = hasher();
        direct.hash_bytes(b"ABCDEFGHIJ").unwrap();

        assert_eq!(h.algorithm().calls, direct.algorithm().calls);
        assert_eq!(h.processed_bytes(), 10);
    }

    #[test]
    fn test_stream_count_to_end_starts_at_position() {
        let mut h = windowed(4);
        let mut source = Cursor::new(b"XXABCD".to_vec());
        source.set_position(2);
        h.hash_stream(&mut source, StreamCount::ToEnd).unwrap();
        assert_eq!(h.algorithm().calls, vec!["first:ABCD", "last::0"]);
    }

    #[test]
    fn test_stream_count_bytes_stops_early() {
        let mut h = windowed(4);
        let mut source = Cursor::new(b"ABCDEFGH".to_vec());
        h.hash_stream(&mut source, StreamCount::Bytes(4)).unwrap();
        assert_eq!(h.algorithm().calls, vec!["first:ABCD", "last::0"]);
        assert_eq!(h.processed_bytes(), 4);
        // The stream is left after the last byte consumed.
        assert_eq!(source.position(), 4);
    }

    #[test]
    fn test_stream_count_all_rewinds() {
        let mut h = windowed(8);
        let mut source = Cursor::new(b"ABCD".to_vec());
        source.set_position(3);
        h.hash_stream(&mut source, StreamCount::All).unwrap();
        assert_eq!(h.processed_bytes(), 4);
    }

    #[test]
    fn test_progress_sequence_is_monotonic() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);

        let mut h = windowed(4);
        h.on_progress(move |fraction| {
            sink.borrow_mut().push(fraction);
            Progress::Continue
        });

        let mut source = Cursor::new(vec![0xAA; 10]);
        h.hash_stream(&mut source, StreamCount::All).unwrap();

        let reports = reports.borrow();
        assert_eq!(reports[0], 0.0);
        assert_eq!(*reports.last().unwrap(), 1.0);
        assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_progress_empty_stream_reports_one() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);

        let mut h = hasher();
        h.on_progress(move |fraction| {
            sink.borrow_mut().push(fraction);
            Progress::Continue
        });

        let mut source = Cursor::new(Vec::new());
        h.hash_stream(&mut source, StreamCount::All).unwrap();

        assert_eq!(*reports.borrow(), vec![0.0, 1.0]);
        assert!(h.finalized());
    }

    #[test]
    fn test_cancellation_stops_windows_but_finalizes() {
        let mut h = windowed(4);
        h.on_progress(|fraction| {
            if fraction > 0.0 {
                Progress::Cancel
            } else {
                Progress::Continue
            }
        });

        let mut source = Cursor::new(vec![0xBB; 16]);
        h.hash_stream(&mut source, StreamCount::All).unwrap();

        // One window applied, then the run was cut short; the last-block
        // handler still ran exactly once.
        assert!(h.cancelled());
        assert!(h.finalized());
        assert_eq!(h.processed_bytes(), 4);
        assert_eq!(
            h.algorithm()
                .calls
                .iter()
                .filter(|c| c.starts_with("last:"))
                .count(),
            1
        );
    }

    #[test]
    fn test_hash_str_uses_utf8_bytes() {
        let mut h = hasher();
        h.hash_str("ABCD").unwrap();
        assert_eq!(h.algorithm().calls, vec!["first:ABCD", "last::0"]);
    }

    #[test]
    fn test_hash_utf16_doubles_ascii_length() {
        let mut h = hasher();
        h.hash_utf16("AB").unwrap();
        assert_eq!(h.processed_bytes(), 4);
        assert_eq!(h.algorithm().calls, vec!["first:A\0B\0", "last::0"]);
    }

    #[test]
    fn test_hash_file_missing_path_is_io_error() {
        let mut h = hasher();
        let result = h.hash_file("definitely/not/here.bin");
        assert!(matches!(result, Err(HashError::Io(_))));
    }

    #[test]
    fn test_zero_window_cannot_reach_the_driver() {
        let mut h = hasher();
        let bad = HasherConfig::default().with_read_buffer_size(0);
        assert!(h.set_config(bad).is_err());

        // The valid default is still in place, so streaming succeeds.
        let mut source = Cursor::new(vec![1, 2, 3]);
        assert!(h.hash_stream(&mut source, StreamCount::All).is_ok());
    }
}
