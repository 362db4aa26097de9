mod action;
mod flashcards;
mod memory;
mod quiz;
mod session;

// Public API of the study subsystem.
pub use action::{ActionOutcome, AnswerFeedback, Feedback, RevealOutcome, StudyAction};
pub use session::StudySession;
