//! Buffer access errors

use thiserror::Error;

/// Failure of an offset-based buffer lookup.
///
/// Always local: callers read it as "no character at this position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("offset {offset} out of range (document length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// Buffer result
pub type BufferResult<T> = Result<T, BufferError>;
