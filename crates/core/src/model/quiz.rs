use serde::Serialize;

/// Number of answer options every quiz item offers.
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    pub question: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub correct_index: usize,
    pub explanation: &'static str,
}

impl QuizItem {
    #[must_use]
    pub const fn new(
        question: &'static str,
        options: [&'static str; OPTION_COUNT],
        correct_index: usize,
        explanation: &'static str,
    ) -> Self {
        Self {
            question,
            options,
            correct_index,
            explanation,
        }
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Text of the correct option, `None` when `correct_index` is out of bounds.
    #[must_use]
    pub fn correct_option(&self) -> Option<&'static str> {
        self.options.get(self.correct_index).copied()
    }

    /// Letter label shown next to an option ("A".."D").
    #[must_use]
    pub fn option_label(option: usize) -> char {
        u8::try_from(option)
            .ok()
            .and_then(|o| b'A'.checked_add(o))
            .map_or('?', char::from)
    }
}
