//! Shared error types for the services crate.

use thiserror::Error;

use study_core::catalog::CatalogError;

/// Errors emitted by `StudySession` actions.
///
/// All of them describe caller misuse; a failed action leaves the session untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudyError {
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid state: {0}")]
    InvalidState(StateViolation),
    #[error("invalid move: {0}")]
    InvalidMove(MoveViolation),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Why a quiz action was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateViolation {
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("option {option} does not exist")]
    OptionOutOfRange { option: usize },
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("the quiz is already completed")]
    QuizCompleted,
}

/// Why a memory action was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveViolation {
    #[error("position {position} is outside the board of {len} cards")]
    OffBoard { position: usize, len: usize },
    #[error("position {position} is already matched")]
    AlreadyMatched { position: usize },
    #[error("position {position} is already face up")]
    AlreadyFlipped { position: usize },
    #[error("positions {first} and {second} must be hidden before revealing another card")]
    MismatchPending { first: usize, second: usize },
    #[error("positions {first} and {second} are not an unresolved mismatch")]
    NoSuchMismatch { first: usize, second: usize },
}

impl From<StateViolation> for StudyError {
    fn from(value: StateViolation) -> Self {
        StudyError::InvalidState(value)
    }
}

impl From<MoveViolation> for StudyError {
    fn from(value: MoveViolation) -> Self {
        StudyError::InvalidMove(value)
    }
}
