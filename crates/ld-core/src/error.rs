use thiserror::Error;

/// Error returned by checked cursor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Requested index is outside the cursor bound
    #[error("index {index} out of range (bound {bound})")]
    OutOfRange { index: usize, bound: usize },
}
