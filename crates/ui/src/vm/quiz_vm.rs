use services::{AnswerFeedback, StudySession};
use study_core::model::QuizItem;

use crate::vm::time_fmt::format_percent;

/// How an option button is styled once the question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

impl OptionMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "quiz-option",
            Self::Correct => "quiz-option correct",
            Self::Incorrect => "quiz-option incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: char,
    pub text: &'static str,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVerdictVm {
    pub correct: bool,
    pub headline: String,
    pub explanation: &'static str,
}

impl QuizVerdictVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "quiz-verdict correct"
        } else {
            "quiz-verdict incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub heading: String,
    pub score_label: String,
    pub question: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub answered: bool,
    pub verdict: Option<QuizVerdictVm>,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub percent_label: String,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Empty,
    InProgress(QuizQuestionVm),
    Completed(QuizResultVm),
}

/// Maps the quiz state; `feedback` is the last answer the view received, if
/// it belongs to the current question.
#[must_use]
pub fn map_quiz(session: &StudySession, feedback: Option<&AnswerFeedback>) -> QuizVm {
    let quiz = &session.state().quiz;
    let total = session.sizes().quiz_items;

    if quiz.completed {
        let percent = quiz.percent(total);
        return QuizVm::Completed(QuizResultVm {
            score_label: format!("{}/{total} correct", quiz.score),
            percent_label: format_percent(percent),
            message: result_message(percent),
        });
    }

    let Some(item) = session.current_quiz_item() else {
        return QuizVm::Empty;
    };
    let feedback = feedback.filter(|feedback| quiz.answered && feedback.question_index == quiz.index);

    QuizVm::InProgress(QuizQuestionVm {
        heading: format!("Question {} of {total}", quiz.index + 1),
        score_label: format!("Score: {}", quiz.score),
        question: item.question,
        options: map_options(item, feedback),
        answered: quiz.answered,
        verdict: feedback.map(|feedback| QuizVerdictVm {
            correct: feedback.correct,
            headline: if feedback.correct {
                "Correct!".to_string()
            } else {
                format!("Not quite. The answer is: {}", feedback.correct_option)
            },
            explanation: feedback.explanation,
        }),
        advance_label: if quiz.index + 1 == total { "Show results" } else { "Next question" },
    })
}

fn map_options(item: &QuizItem, feedback: Option<&AnswerFeedback>) -> Vec<QuizOptionVm> {
    item.options
        .iter()
        .copied()
        .enumerate()
        .map(|(index, text)| {
            let mark = match feedback {
                Some(feedback) if index == feedback.correct_index => OptionMark::Correct,
                Some(feedback) if index == feedback.chosen => OptionMark::Incorrect,
                _ => OptionMark::Neutral,
            };
            QuizOptionVm {
                index,
                label: QuizItem::option_label(index),
                text,
                mark,
            }
        })
        .collect()
}

fn result_message(percent: f64) -> &'static str {
    if percent >= 100.0 {
        "Perfect score. Outstanding work!"
    } else if percent >= 80.0 {
        "Great result. You know this material well."
    } else if percent >= 50.0 {
        "Solid start. Review the flashcards and try again."
    } else {
        "Keep practising. The flashcards cover every answer."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{Feedback, StudyAction};
    use study_core::time::fixed_clock;

    fn answer(session: &mut StudySession, option: usize) -> AnswerFeedback {
        match session.apply(StudyAction::Answer { option }).unwrap().feedback {
            Feedback::Answer(feedback) => feedback,
            other => panic!("unexpected feedback {other:?}"),
        }
    }

    #[test]
    fn unanswered_question_has_neutral_options() {
        let session = StudySession::builtin(fixed_clock());
        let QuizVm::InProgress(vm) = map_quiz(&session, None) else {
            panic!("quiz should be in progress");
        };

        assert_eq!(vm.heading, "Question 1 of 8");
        assert_eq!(vm.options.len(), 4);
        assert_eq!(vm.options[0].label, 'A');
        assert!(vm.options.iter().all(|option| option.mark == OptionMark::Neutral));
        assert!(vm.verdict.is_none());
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let mut session = StudySession::builtin(fixed_clock());
        let correct = session.current_quiz_item().unwrap().correct_index;
        let wrong = (correct + 1) % 4;
        let feedback = answer(&mut session, wrong);

        let QuizVm::InProgress(vm) = map_quiz(&session, Some(&feedback)) else {
            panic!("quiz should be in progress");
        };
        assert_eq!(vm.options[correct].mark, OptionMark::Correct);
        assert_eq!(vm.options[wrong].mark, OptionMark::Incorrect);
        let verdict = vm.verdict.expect("verdict");
        assert!(!verdict.correct);
        assert!(verdict.headline.contains(feedback.correct_option));
    }

    #[test]
    fn stale_feedback_is_ignored_after_advancing() {
        let mut session = StudySession::builtin(fixed_clock());
        let feedback = answer(&mut session, 0);
        session.advance_quiz().unwrap();

        let QuizVm::InProgress(vm) = map_quiz(&session, Some(&feedback)) else {
            panic!("quiz should be in progress");
        };
        assert!(vm.verdict.is_none());
        assert!(!vm.answered);
    }

    #[test]
    fn completed_quiz_shows_result() {
        let mut session = StudySession::builtin(fixed_clock());
        for _ in 0..session.sizes().quiz_items {
            let correct = session.current_quiz_item().unwrap().correct_index;
            answer(&mut session, correct);
            session.advance_quiz().unwrap();
        }

        let QuizVm::Completed(vm) = map_quiz(&session, None) else {
            panic!("quiz should be completed");
        };
        assert_eq!(vm.score_label, "8/8 correct");
        assert_eq!(vm.percent_label, "100%");
        assert_eq!(vm.message, "Perfect score. Outstanding work!");
    }
}
