/// Errors produced by the Marble library.
///
/// Formatting itself never fails; the only fallible step is converting an
/// integer into a [`HeaderLevel`](crate::HeaderLevel).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarbleError {
    /// Header levels run from 1 to 6.
    #[error("invalid header level {0}: expected 1-6")]
    InvalidHeaderLevel(u8),
}

/// Convenience Result type for Marble operations.
pub type Result<T> = std::result::Result<T, MarbleError>;
