#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod stats;
pub mod study;

pub use study_core::Clock;

pub use error::{MoveViolation, StateViolation, StudyError};
pub use export::{export_file_name, export_summary};
pub use stats::{StudyStats, StudyTip};
pub use study::{
    ActionOutcome, AnswerFeedback, Feedback, RevealOutcome, StudyAction, StudySession,
};
