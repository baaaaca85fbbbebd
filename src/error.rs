//! Error types for packing.

use thiserror::Error;

/// Errors that can occur while packing into a fixed size buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// The next chunk did not fit. The destination content is incomplete
    /// and must be discarded.
    #[error("destination too small: need {required} bytes, have {capacity}")]
    DestinationTooSmall { required: usize, capacity: usize },
}
