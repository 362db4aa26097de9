use serde::Serialize;
use tracing::{debug, warn};

use study_core::model::{Achievement, PairId};

use super::StudySession;
use crate::error::StudyError;

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Every discrete learner action a presentation layer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StudyAction {
    FlipCard,
    NextCard,
    PreviousCard,
    JumpToCard { index: usize },
    Answer { option: usize },
    AdvanceQuiz,
    RestartQuiz,
    InitializeBoard,
    Reveal { position: usize },
    ResolveMismatch { first: usize, second: usize },
    RestartMemory,
}

impl StudyAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StudyAction::FlipCard => "flip_card",
            StudyAction::NextCard => "next_card",
            StudyAction::PreviousCard => "previous_card",
            StudyAction::JumpToCard { .. } => "jump_to_card",
            StudyAction::Answer { .. } => "answer",
            StudyAction::AdvanceQuiz => "advance_quiz",
            StudyAction::RestartQuiz => "restart_quiz",
            StudyAction::InitializeBoard => "initialize_board",
            StudyAction::Reveal { .. } => "reveal",
            StudyAction::ResolveMismatch { .. } => "resolve_mismatch",
            StudyAction::RestartMemory => "restart_memory",
        }
    }
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What a quiz answer revealed, for immediate display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub chosen: usize,
    pub correct: bool,
    pub correct_index: usize,
    pub correct_option: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RevealOutcome {
    /// First card of a move is face up.
    Waiting,
    Matched { pair_id: PairId },
    /// The last pair was found.
    Completed { moves: u32 },
    /// Both cards stay visible until the caller resolves them.
    Mismatch { first: usize, second: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    #[default]
    None,
    Answer(AnswerFeedback),
    Reveal(RevealOutcome),
}

/// Result of one applied action.
///
/// `unlocked` holds only achievements earned by this action, so a UI can
/// celebrate them once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub unlocked: Vec<Achievement>,
    pub feedback: Feedback,
}

impl ActionOutcome {
    pub(super) fn unlocked(unlocked: Vec<Achievement>) -> Self {
        Self {
            unlocked,
            feedback: Feedback::None,
        }
    }

    pub(super) fn with_feedback(unlocked: Vec<Achievement>, feedback: Feedback) -> Self {
        Self { unlocked, feedback }
    }
}

//
// ─── DISPATCH ──────────────────────────────────────────────────────────────────
//

impl StudySession {
    /// Applies one action as a single atomic state transition.
    ///
    /// # Errors
    ///
    /// Returns `StudyError` when the action is not valid in the current state;
    /// the session is left unchanged in that case.
    pub fn apply(&mut self, action: StudyAction) -> Result<ActionOutcome, StudyError> {
        debug!(action = action.name(), ?action, "applying study action");
        let result = match action {
            StudyAction::FlipCard => Ok(self.flip()),
            StudyAction::NextCard => Ok(self.next_card()),
            StudyAction::PreviousCard => Ok(self.previous_card()),
            StudyAction::JumpToCard { index } => self.jump_to_card(index),
            StudyAction::Answer { option } => self.answer(option),
            StudyAction::AdvanceQuiz => self.advance_quiz(),
            StudyAction::RestartQuiz => Ok(self.restart_quiz()),
            StudyAction::InitializeBoard => Ok(self.initialize_board()),
            StudyAction::Reveal { position } => self.reveal(position),
            StudyAction::ResolveMismatch { first, second } => self.resolve_mismatch(first, second),
            StudyAction::RestartMemory => Ok(self.restart_memory()),
        };
        if let Err(err) = &result {
            warn!(action = action.name(), error = %err, "study action rejected");
        }
        result
    }
}
