//! Internal buffer management for read windows.
//!
//! This module provides a thread-local buffer pool so repeated stream and
//! file hashing does not reallocate its read window every call. It is an
//! implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
