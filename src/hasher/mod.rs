//! The hashing engine and its source drivers.
//!
//! - [`IncrementalHasher`] - Generic engine with `init()`/`update()`/`finish()` API
//! - [`StreamCount`] - How much of a stream a driver consumes
//! - [`Progress`] - Decision returned by a progress callback

mod accumulator;
mod driver;
mod engine;
mod persist;

pub(crate) use accumulator::BlockAccumulator;
pub use driver::StreamCount;
pub use engine::{IncrementalHasher, Progress};
