//! Per-activity figures and study tips derived from a session snapshot.

use serde::Serialize;

use study_core::CatalogSizes;
use study_core::model::SessionState;

/// Completion figures for each activity plus the aggregated progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyStats {
    pub cards_studied: usize,
    pub cards_total: usize,
    pub quiz_score: usize,
    pub quiz_answered: usize,
    pub quiz_total: usize,
    pub quiz_completed: bool,
    pub pairs_matched: usize,
    pub pairs_total: usize,
    pub memory_completed: bool,
    pub overall_progress: f64,
    pub achievements: usize,
}

impl StudyStats {
    #[must_use]
    pub fn collect(state: &SessionState, sizes: CatalogSizes) -> Self {
        Self {
            cards_studied: state.flashcards.studied.len(),
            cards_total: sizes.flashcards,
            quiz_score: state.quiz.score,
            quiz_answered: state.quiz.index,
            quiz_total: sizes.quiz_items,
            quiz_completed: state.quiz.completed,
            pairs_matched: state.memory.matched_pairs(),
            pairs_total: sizes.memory_pairs,
            memory_completed: state.memory.completed,
            overall_progress: state.overall_progress(),
            achievements: state.achievements().len(),
        }
    }

    #[must_use]
    pub fn card_percent(&self) -> f64 {
        percent(self.cards_studied, self.cards_total)
    }

    /// Quiz success rate; zero until the quiz is completed.
    #[must_use]
    pub fn quiz_percent(&self) -> f64 {
        if self.quiz_completed {
            percent(self.quiz_score, self.quiz_total)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn memory_percent(&self) -> f64 {
        percent(self.pairs_matched, self.pairs_total)
    }

    /// Suggestions for what to study next, in display order.
    #[must_use]
    pub fn tips(&self) -> Vec<StudyTip> {
        let mut tips = Vec::new();
        if self.cards_studied * 2 < self.cards_total {
            tips.push(StudyTip::ReviewFlashcards);
        }
        if self.quiz_completed && self.quiz_percent() < 70.0 {
            tips.push(StudyTip::RetakeQuiz);
        }
        if !self.memory_completed {
            tips.push(StudyTip::PlayMemory);
        }
        tips
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyTip {
    ReviewFlashcards,
    RetakeQuiz,
    PlayMemory,
}

impl StudyTip {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            StudyTip::ReviewFlashcards => {
                "Flashcards: you have only worked through a few cards so far. Try to learn 3-5 cards a day!"
            }
            StudyTip::RetakeQuiz => {
                "Quiz: retake the quiz to consolidate what you know. Goal: at least 70%!"
            }
            StudyTip::PlayMemory => {
                "Memory: the memory game helps you link terms to their definitions!"
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
