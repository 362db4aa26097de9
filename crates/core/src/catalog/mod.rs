//! Compiled-in study content and its size summary.

mod builtin;

use thiserror::Error;

use crate::model::{Flashcard, MemoryPair, OPTION_COUNT, QuizItem};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no flashcards")]
    NoFlashcards,

    #[error("catalog has no quiz items")]
    NoQuizItems,

    #[error("catalog has no memory pairs")]
    NoMemoryPairs,

    #[error("quiz item {item} marks option {correct_index} as correct but only has {max}", max = OPTION_COUNT)]
    CorrectIndexOutOfRange { item: usize, correct_index: usize },

    #[error("{section} entry {index} has empty text")]
    BlankText { section: &'static str, index: usize },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Element counts of each catalog list, the only catalog input the progress
/// engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSizes {
    pub flashcards: usize,
    pub quiz_items: usize,
    pub memory_pairs: usize,
}

/// Immutable study content: flashcards, quiz items and memory pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    flashcards: &'static [Flashcard],
    quiz: &'static [QuizItem],
    memory_pairs: &'static [MemoryPair],
}

impl Catalog {
    /// Builds a catalog from static lists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a list is empty, a quiz item points at a
    /// missing option, or any text is blank.
    pub fn new(
        flashcards: &'static [Flashcard],
        quiz: &'static [QuizItem],
        memory_pairs: &'static [MemoryPair],
    ) -> Result<Self, CatalogError> {
        if flashcards.is_empty() {
            return Err(CatalogError::NoFlashcards);
        }
        if quiz.is_empty() {
            return Err(CatalogError::NoQuizItems);
        }
        if memory_pairs.is_empty() {
            return Err(CatalogError::NoMemoryPairs);
        }

        for (index, card) in flashcards.iter().enumerate() {
            ensure_text("flashcard", index, &[card.question, card.answer])?;
        }
        for (index, item) in quiz.iter().enumerate() {
            if item.correct_index >= OPTION_COUNT {
                return Err(CatalogError::CorrectIndexOutOfRange {
                    item: index,
                    correct_index: item.correct_index,
                });
            }
            ensure_text("quiz", index, &[item.question, item.explanation])?;
            ensure_text("quiz", index, &item.options)?;
        }
        for (index, pair) in memory_pairs.iter().enumerate() {
            ensure_text("memory", index, &[pair.term, pair.definition])?;
        }

        Ok(Self {
            flashcards,
            quiz,
            memory_pairs,
        })
    }

    /// The somatoform-disorders catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            flashcards: builtin::FLASHCARDS,
            quiz: builtin::QUIZ,
            memory_pairs: builtin::MEMORY_PAIRS,
        }
    }

    #[must_use]
    pub fn flashcards(&self) -> &'static [Flashcard] {
        self.flashcards
    }

    #[must_use]
    pub fn quiz(&self) -> &'static [QuizItem] {
        self.quiz
    }

    #[must_use]
    pub fn memory_pairs(&self) -> &'static [MemoryPair] {
        self.memory_pairs
    }

    #[must_use]
    pub fn sizes(&self) -> CatalogSizes {
        CatalogSizes {
            flashcards: self.flashcards.len(),
            quiz_items: self.quiz.len(),
            memory_pairs: self.memory_pairs.len(),
        }
    }
}

fn ensure_text(section: &'static str, index: usize, texts: &[&str]) -> Result<(), CatalogError> {
    if texts.iter().any(|t| t.trim().is_empty()) {
        return Err(CatalogError::BlankText { section, index });
    }
    Ok(())
}
