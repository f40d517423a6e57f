use thiserror::Error;

/// Precondition violations reported by the checked `try_*` operations.
///
/// The panicking counterparts (`range_query`, `point_update`) fail with the
/// same messages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SegmentTreeError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `lo > hi`, or `hi` past the last element.
    #[error("invalid range [{lo}, {hi}] for length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, SegmentTreeError>;
