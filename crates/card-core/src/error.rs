//! Canvas Errors

use crate::card::CardId;

/// Common result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Rejected canvas operations. None of them leave the state half-modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("card index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("card {0} cannot take a non-finite size")]
    InvalidSize(CardId),
    #[error("unknown card {0}")]
    UnknownCard(CardId),
    #[error("no edit draft is open")]
    NoOpenDraft,
    #[error("edit draft refers to deleted card {0}")]
    StaleDraft(CardId),
}
