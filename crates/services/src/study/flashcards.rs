use tracing::debug;

use study_core::model::{AchievementKind, Flashcard};

use super::{ActionOutcome, StudySession};
use crate::error::StudyError;

impl StudySession {
    /// The flashcard under the cursor.
    #[must_use]
    pub fn current_flashcard(&self) -> Option<&'static Flashcard> {
        self.catalog
            .flashcards()
            .get(self.state.flashcards.current)
    }

    /// Turns the current card over. Turning it face up marks it studied.
    pub fn flip(&mut self) -> ActionOutcome {
        let cards = &mut self.state.flashcards;
        cards.flipped = !cards.flipped;
        if cards.flipped {
            cards.studied.insert(cards.current);
        }
        debug!(card = cards.current, flipped = cards.flipped, "flashcard flipped");

        let mut unlocked = Vec::new();
        self.refresh_progress(&mut unlocked);
        ActionOutcome::unlocked(unlocked)
    }

    /// Moves to the next card, wrapping around, and checks for full coverage.
    pub fn next_card(&mut self) -> ActionOutcome {
        let len = self.catalog.flashcards().len();
        let cards = &mut self.state.flashcards;
        cards.current = (cards.current + 1) % len;
        cards.flipped = false;

        let mut unlocked = Vec::new();
        if cards.studied.len() >= len {
            self.unlock(AchievementKind::FlashcardMaster, &mut unlocked);
        }
        ActionOutcome::unlocked(unlocked)
    }

    /// Moves to the previous card, wrapping around.
    pub fn previous_card(&mut self) -> ActionOutcome {
        let len = self.catalog.flashcards().len();
        let cards = &mut self.state.flashcards;
        cards.current = (cards.current + len - 1) % len;
        cards.flipped = false;
        ActionOutcome::default()
    }

    /// Jumps straight to a card, face down.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::OutOfRange` if `index` is not a catalog position.
    pub fn jump_to_card(&mut self, index: usize) -> Result<ActionOutcome, StudyError> {
        let len = self.catalog.flashcards().len();
        if index >= len {
            return Err(StudyError::OutOfRange { index, len });
        }
        let cards = &mut self.state.flashcards;
        cards.current = index;
        cards.flipped = false;
        Ok(ActionOutcome::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_clock;

    fn titles(outcome: &ActionOutcome) -> Vec<&'static str> {
        outcome.unlocked.iter().map(|a| a.title).collect()
    }

    #[test]
    fn flip_marks_studied_only_when_turning_face_up() {
        let mut session = StudySession::builtin(fixed_clock());
        let _ = session.flip();
        assert!(session.state().flashcards.studied.contains(&0));
        assert!((session.state().overall_progress() - 3.0).abs() < 1e-9);

        let _ = session.flip();
        assert!(!session.state().flashcards.flipped);
        assert_eq!(session.state().flashcards.studied.len(), 1);
    }

    #[test]
    fn navigation_wraps_and_resets_flip() {
        let mut session = StudySession::builtin(fixed_clock());
        let _ = session.previous_card();
        assert_eq!(session.state().flashcards.current, 9);

        let _ = session.flip();
        let _ = session.next_card();
        assert_eq!(session.state().flashcards.current, 0);
        assert!(!session.state().flashcards.flipped);
    }

    #[test]
    fn jump_to_rejects_out_of_range() {
        let mut session = StudySession::builtin(fixed_clock());
        let _ = session.flip();
        let err = session.jump_to_card(10).unwrap_err();
        assert_eq!(err, StudyError::OutOfRange { index: 10, len: 10 });
        assert!(session.state().flashcards.flipped);

        session.jump_to_card(3).unwrap();
        assert_eq!(session.state().flashcards.current, 3);
        assert!(!session.state().flashcards.flipped);
        assert_eq!(
            session.current_flashcard().unwrap().question,
            "Persistent somatoform pain disorder"
        );
    }

    #[test]
    fn studying_every_card_unlocks_flashcard_master_on_next() {
        let mut session = StudySession::builtin(fixed_clock());
        let mut all = Vec::new();
        for _ in 0..10 {
            all.extend(session.flip().unlocked);
            all.extend(session.next_card().unlocked);
        }
        let earned: Vec<_> = all.iter().map(|a| a.title).collect();
        assert_eq!(earned, vec!["First Steps", "Flashcard Master"]);

        let again = session.next_card();
        assert!(titles(&again).is_empty());
        assert!((session.state().overall_progress() - 30.0).abs() < 1e-9);
    }
}
