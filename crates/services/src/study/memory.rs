use rand::seq::SliceRandom;
use tracing::debug;

use study_core::model::{AchievementKind, MemoryCard, MemoryState, PairId};

use super::{ActionOutcome, Feedback, RevealOutcome, StudySession};
use crate::error::{MoveViolation, StudyError};

impl StudySession {
    /// Deals a freshly shuffled board unless one is already in play.
    pub fn initialize_board(&mut self) -> ActionOutcome {
        if self.state.memory.is_initialized() {
            return ActionOutcome::default();
        }

        let mut cards: Vec<MemoryCard> = self
            .catalog
            .memory_pairs()
            .iter()
            .enumerate()
            .flat_map(|(i, pair)| pair.cards(PairId::new(u32::try_from(i).unwrap_or(u32::MAX))))
            .collect();
        cards.shuffle(&mut self.rng);
        debug!(cards = cards.len(), "memory board dealt");

        self.state.memory = MemoryState::with_board(cards);
        ActionOutcome::default()
    }

    /// Turns a card face up and scores the move once two cards are open.
    ///
    /// A mismatch leaves both cards visible; the caller hides them with
    /// `resolve_mismatch` before any further reveal is accepted.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidMove` if the position is off the board,
    /// already matched or face up, or a mismatch is still unresolved.
    pub fn reveal(&mut self, position: usize) -> Result<ActionOutcome, StudyError> {
        let memory = &self.state.memory;
        if position >= memory.len() {
            return Err(MoveViolation::OffBoard {
                position,
                len: memory.len(),
            }
            .into());
        }
        if memory.matched[position] {
            return Err(MoveViolation::AlreadyMatched { position }.into());
        }
        if memory.flipped[position] {
            return Err(MoveViolation::AlreadyFlipped { position }.into());
        }
        if let &[first, second, ..] = memory.open_positions().as_slice() {
            return Err(MoveViolation::MismatchPending { first, second }.into());
        }

        let memory = &mut self.state.memory;
        memory.flipped[position] = true;
        let open = memory.open_positions();
        let &[first, second] = open.as_slice() else {
            return Ok(ActionOutcome::with_feedback(
                Vec::new(),
                Feedback::Reveal(RevealOutcome::Waiting),
            ));
        };

        memory.moves += 1;
        if !memory.board[first].matches(&memory.board[second]) {
            debug!(first, second, moves = memory.moves, "memory mismatch");
            return Ok(ActionOutcome::with_feedback(
                Vec::new(),
                Feedback::Reveal(RevealOutcome::Mismatch { first, second }),
            ));
        }

        memory.matched[first] = true;
        memory.matched[second] = true;
        let pair_id = memory.board[first].pair_id;
        debug!(%pair_id, moves = memory.moves, "memory pair matched");

        let mut unlocked = Vec::new();
        if !memory.all_matched() {
            return Ok(ActionOutcome::with_feedback(
                unlocked,
                Feedback::Reveal(RevealOutcome::Matched { pair_id }),
            ));
        }

        memory.completed = true;
        let moves = memory.moves;
        self.unlock(AchievementKind::MemoryMaster { moves }, &mut unlocked);
        self.refresh_progress(&mut unlocked);
        Ok(ActionOutcome::with_feedback(
            unlocked,
            Feedback::Reveal(RevealOutcome::Completed { moves }),
        ))
    }

    /// Hides an unmatched pair after its visible delay elapsed.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidMove` unless `first` and `second` are
    /// exactly the two open, unmatched positions.
    pub fn resolve_mismatch(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<ActionOutcome, StudyError> {
        let memory = &mut self.state.memory;
        let pending = match memory.open_positions().as_slice() {
            &[a, b] => (a, b) == (first.min(second), first.max(second)),
            _ => false,
        };
        if !pending {
            return Err(MoveViolation::NoSuchMismatch { first, second }.into());
        }

        memory.flipped[first] = false;
        memory.flipped[second] = false;
        Ok(ActionOutcome::default())
    }

    /// Clears the board; the next `initialize_board` deals a new one.
    pub fn restart_memory(&mut self) -> ActionOutcome {
        self.state.memory.reset();
        ActionOutcome::default()
    }
}
