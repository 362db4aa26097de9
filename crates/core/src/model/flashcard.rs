use serde::Serialize;

/// A question/answer pair studied by flipping.
///
/// Flashcards are identified by their position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: &'static str,
    pub answer: &'static str,
}

impl Flashcard {
    #[must_use]
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }
}
