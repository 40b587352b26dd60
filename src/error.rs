use thiserror::Error;

/// Errors reported by [`DynArray`](crate::DynArray) operations.
///
/// Every error is signaled at the call that violates a precondition, before
/// any mutation has taken place. Nothing is caught or retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index lies outside the valid range for the attempted operation.
    ///
    /// Read, replace and remove require `index < len`; insertion also accepts
    /// `index == len`.
    #[error("index {index} out of range, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removal was attempted on an array holding no elements.
    ///
    /// Checked before the index check, so removing from an empty array
    /// reports `Empty` no matter which index was passed.
    #[error("remove from empty array")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
