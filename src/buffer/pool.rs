//! Thread-local buffer pool for efficient memory reuse.

use std::cell::RefCell;

/// Largest buffer capacity the pool will retain (2 MiB).
pub const MAX_POOLED_CAPACITY: usize = 2 * 1024 * 1024;

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable byte buffer sized for one read window.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one,
    /// zero-filled to `len` bytes.
    pub fn take(len: usize) -> Self {
        let mut data = THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            pool.pop().unwrap_or_default()
        });
        data.clear();
        data.resize(len, 0);
        Self { data }
    }

    /// Returns the window as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the window as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Return the buffer to the pool if it's not too large
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_take_is_zero_filled() {
        let buf = Buffer::take(16);
        assert_eq!(buf.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn test_buffer_reuse_clears_contents() {
        {
            let mut buf = Buffer::take(8);
            buf.as_mut_slice().copy_from_slice(b"12345678");
        }

        // The buffer returns to the pool on drop; the next take must not
        // leak the previous contents.
        let buf = Buffer::take(8);
        assert_eq!(buf.as_slice(), &[0u8; 8]);
    }

    #[test]
    fn test_buffer_resizes_between_takes() {
        {
            let _small = Buffer::take(4);
        }
        let large = Buffer::take(32);
        assert_eq!(large.as_slice().len(), 32);
    }
}
