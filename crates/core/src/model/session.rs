use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Achievement, AchievementKind, MemoryCard};
use crate::progress::ProgressUpdate;

//
// ─── PER-ACTIVITY STATE ────────────────────────────────────────────────────────
//

/// Flashcard position, flip state and the set of cards flipped at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlashcardState {
    pub current: usize,
    pub flipped: bool,
    pub studied: BTreeSet<usize>,
}

/// Quiz cursor. `index` counts advanced questions; `answered` is true between
/// `answer` and `advance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub index: usize,
    pub score: usize,
    pub answered: bool,
    pub completed: bool,
}

impl QuizState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Share of correct answers in percent; zero until the quiz is completed.
    #[must_use]
    pub fn percent(&self, total: usize) -> f64 {
        if !self.completed || total == 0 {
            return 0.0;
        }
        ratio(self.score, total) * 100.0
    }
}

/// Memory board with `flipped` and `matched` kept parallel to `board`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryState {
    pub board: Vec<MemoryCard>,
    pub flipped: Vec<bool>,
    pub matched: Vec<bool>,
    pub moves: u32,
    pub completed: bool,
}

impl MemoryState {
    /// A fresh, face-down board holding `cards` in the given order.
    #[must_use]
    pub fn with_board(cards: Vec<MemoryCard>) -> Self {
        let len = cards.len();
        Self {
            board: cards,
            flipped: vec![false; len],
            matched: vec![false; len],
            moves: 0,
            completed: false,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.board.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Positions that are face up but not yet matched, in board order.
    #[must_use]
    pub fn open_positions(&self) -> Vec<usize> {
        self.flipped
            .iter()
            .zip(&self.matched)
            .enumerate()
            .filter_map(|(i, (&flipped, &matched))| (flipped && !matched).then_some(i))
            .collect()
    }

    /// True while two unmatched cards are face up and waiting to be hidden.
    #[must_use]
    pub fn has_pending_mismatch(&self) -> bool {
        self.open_positions().len() >= 2
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count() / 2
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.is_initialized() && self.matched.iter().all(|&m| m)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// All mutable learner progress for one study session.
///
/// Achievements and overall progress are only reachable through `unlock` and
/// `apply_progress`, so progress always comes out of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub flashcards: FlashcardState,
    pub quiz: QuizState,
    pub memory: MemoryState,
    achievements: Vec<Achievement>,
    overall_progress: f64,
    started_at: DateTime<Utc>,
}

impl SessionState {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            flashcards: FlashcardState::default(),
            quiz: QuizState::default(),
            memory: MemoryState::default(),
            achievements: Vec::new(),
            overall_progress: 0.0,
            started_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Overall progress in `[0, 100]`.
    #[must_use]
    pub fn overall_progress(&self) -> f64 {
        self.overall_progress
    }

    /// Achievements in unlock order.
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// The last `n` achievements, oldest first.
    #[must_use]
    pub fn recent_achievements(&self, n: usize) -> &[Achievement] {
        let start = self.achievements.len().saturating_sub(n);
        &self.achievements[start..]
    }

    #[must_use]
    pub fn has_achievement(&self, title: &str) -> bool {
        self.achievements.iter().any(|a| a.title == title)
    }

    /// Records an achievement unless one with the same title already exists.
    ///
    /// Returns the new entry when it was recorded.
    pub fn unlock(&mut self, kind: AchievementKind, now: DateTime<Utc>) -> Option<Achievement> {
        if self.has_achievement(kind.title()) {
            return None;
        }
        let achievement = Achievement::new(kind, now);
        self.achievements.push(achievement.clone());
        Some(achievement)
    }

    /// Stores a recomputed progress value and records its band achievements.
    ///
    /// Returns the achievements that were actually new.
    pub fn apply_progress(&mut self, update: ProgressUpdate) -> Vec<Achievement> {
        self.overall_progress = update.progress;
        let mut recorded = Vec::new();
        for achievement in update.unlocked {
            if !self.has_achievement(achievement.title) {
                self.achievements.push(achievement.clone());
                recorded.push(achievement);
            }
        }
        recorded
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
