use tracing::debug;

use study_core::model::{AchievementKind, OPTION_COUNT, QuizItem};

use super::{ActionOutcome, AnswerFeedback, Feedback, StudySession};
use crate::error::{StateViolation, StudyError};

impl StudySession {
    /// The question waiting for an answer, `None` once the quiz is completed.
    #[must_use]
    pub fn current_quiz_item(&self) -> Option<&'static QuizItem> {
        if self.state.quiz.completed {
            return None;
        }
        self.catalog.quiz().get(self.state.quiz.index)
    }

    /// Answers the current question with the option at `option`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidState` if the question was already answered,
    /// the option does not exist, or the quiz is completed.
    pub fn answer(&mut self, option: usize) -> Result<ActionOutcome, StudyError> {
        if self.state.quiz.answered {
            return Err(StateViolation::AlreadyAnswered.into());
        }
        if option >= OPTION_COUNT {
            return Err(StateViolation::OptionOutOfRange { option }.into());
        }
        let item = self
            .current_quiz_item()
            .ok_or(StateViolation::QuizCompleted)?;

        let question_index = self.state.quiz.index;
        let correct = item.is_correct(option);
        self.state.quiz.answered = true;
        debug!(question = question_index, option, correct, "quiz answered");

        let mut unlocked = Vec::new();
        if correct {
            self.state.quiz.score += 1;
            self.unlock(AchievementKind::QuizTalent, &mut unlocked);
        }

        let feedback = AnswerFeedback {
            question_index,
            chosen: option,
            correct,
            correct_index: item.correct_index,
            correct_option: item.correct_option().unwrap_or_default(),
            explanation: item.explanation,
        };
        Ok(ActionOutcome::with_feedback(
            unlocked,
            Feedback::Answer(feedback),
        ))
    }

    /// Moves past an answered question; completing the last one scores the quiz.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidState` if the current question is unanswered.
    pub fn advance_quiz(&mut self) -> Result<ActionOutcome, StudyError> {
        if !self.state.quiz.answered {
            return Err(StateViolation::NotAnswered.into());
        }
        let total = self.catalog.quiz().len();
        let quiz = &mut self.state.quiz;
        quiz.index += 1;
        quiz.answered = false;

        let mut unlocked = Vec::new();
        if quiz.index >= total {
            quiz.completed = true;
            let score = quiz.score;
            debug!(score, total, "quiz completed");
            self.refresh_progress(&mut unlocked);

            if score == total {
                self.unlock(AchievementKind::Perfectionist, &mut unlocked);
            } else if score * 100 >= total * 80 {
                self.unlock(AchievementKind::QuizExpert, &mut unlocked);
            }
        }
        Ok(ActionOutcome::unlocked(unlocked))
    }

    /// Starts the quiz over. Earned achievements are kept.
    pub fn restart_quiz(&mut self) -> ActionOutcome {
        self.state.quiz.reset();
        ActionOutcome::default()
    }
}
