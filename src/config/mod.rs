//! Configuration for hashing behavior.
//!
//! This module provides types to configure how the source drivers feed data
//! into the hashing engine:
//!
//! - [`HasherConfig`] - Controls the read-window size and buffer-progress
//!   reporting
//!
//! # Example
//!
//! ```
//! use digestrs::HasherConfig;
//!
//! // Custom read window
//! let config = HasherConfig::new(256 * 1024)?;
//!
//! // Report progress for in-memory buffers too
//! let config = HasherConfig::default().with_buffer_progress(true);
//!
//! # Ok::<(), digestrs::HashError>(())
//! ```

use crate::error::HashError;

/// Default read-window size for stream and file hashing (1 MiB).
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Configuration for the source drivers.
///
/// `HasherConfig` controls observability and I/O plumbing only; it has no
/// effect on the digest value produced. The hashing engine reads it when a
/// macro method (`hash_bytes`, `hash_stream`, `hash_file`, ...) drives a
/// byte source:
///
/// - `read_buffer_size` - Bytes read per window while streaming
/// - `buffer_progress` - Whether in-memory buffer hashing also reports
///   progress (stream and file hashing always report when a callback is set)
///
/// # Example
///
/// ```
/// use digestrs::HasherConfig;
///
/// // Use default configuration (1 MiB windows, no buffer progress)
/// let config = HasherConfig::default();
///
/// // Custom configuration
/// let config = HasherConfig::new(64 * 1024)?;
///
/// // Builder pattern
/// let config = HasherConfig::default()
///     .with_read_buffer_size(64 * 1024)
///     .with_buffer_progress(true);
/// # Ok::<(), digestrs::HashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasherConfig {
    /// Bytes read per window while streaming.
    read_buffer_size: usize,

    /// Whether buffer hashing reports progress.
    buffer_progress: bool,
}

impl HasherConfig {
    /// Creates a new configuration with the specified read-window size.
    ///
    /// # Arguments
    ///
    /// * `read_buffer_size` - Bytes read per window (must be non-zero)
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidConfig`] if `read_buffer_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::HasherConfig;
    ///
    /// let config = HasherConfig::new(64 * 1024)?;
    /// assert_eq!(config.read_buffer_size(), 64 * 1024);
    /// # Ok::<(), digestrs::HashError>(())
    /// ```
    pub fn new(read_buffer_size: usize) -> Result<Self, HashError> {
        if read_buffer_size == 0 {
            return Err(HashError::InvalidConfig {
                message: "read buffer size must be non-zero",
            });
        }

        Ok(Self {
            read_buffer_size,
            buffer_progress: false,
        })
    }

    /// Sets the read-window size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`HasherConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::HasherConfig;
    ///
    /// let config = HasherConfig::default().with_read_buffer_size(8192);
    /// assert_eq!(config.read_buffer_size(), 8192);
    /// ```
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Sets whether in-memory buffer hashing reports progress.
    ///
    /// When disabled (the default), `hash_bytes` processes the whole buffer
    /// in a single pass with no windowing and no callbacks. When enabled,
    /// the buffer is driven through the same windowed loop as streams.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::HasherConfig;
    ///
    /// let config = HasherConfig::default().with_buffer_progress(true);
    /// assert!(config.buffer_progress());
    /// ```
    pub fn with_buffer_progress(mut self, enabled: bool) -> Self {
        self.buffer_progress = enabled;
        self
    }

    /// Returns the read-window size.
    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Returns whether buffer hashing reports progress.
    pub fn buffer_progress(&self) -> bool {
        self.buffer_progress
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::HasherConfig;
    ///
    /// let config = HasherConfig::default().with_read_buffer_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), HashError> {
        Self::new(self.read_buffer_size).map(|_| ())
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            buffer_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HasherConfig::default();
        assert_eq!(config.read_buffer_size(), DEFAULT_READ_BUFFER_SIZE);
        assert!(!config.buffer_progress());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HasherConfig::default()
            .with_read_buffer_size(8192)
            .with_buffer_progress(true);

        assert_eq!(config.read_buffer_size(), 8192);
        assert!(config.buffer_progress());
    }

    #[test]
    fn test_invalid_config_zero_window() {
        let result = HasherConfig::new(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_catches_zero_window() {
        let config = HasherConfig::default().with_read_buffer_size(0);
        assert!(config.validate().is_err());
    }
}
