//! Progress & achievement engine.
//!
//! Maps a session snapshot plus catalog sizes to an overall progress value and
//! the progress-band achievements that value newly earns. Pure: the caller
//! stores the result through `SessionState::apply_progress`.

use chrono::{DateTime, Utc};

use crate::catalog::CatalogSizes;
use crate::model::{Achievement, AchievementKind, SessionState, ratio};

pub const FLASHCARD_WEIGHT: f64 = 30.0;
pub const QUIZ_WEIGHT: f64 = 35.0;
pub const MEMORY_WEIGHT: f64 = 35.0;

/// Lower bound of each progress band, ascending.
const BANDS: [(f64, AchievementKind); 4] = [
    (25.0, AchievementKind::FirstSteps),
    (50.0, AchievementKind::Halfway),
    (75.0, AchievementKind::AlmostDone),
    (100.0, AchievementKind::Master),
];

/// Result of a recompute; only the engine can build one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub(crate) progress: f64,
    pub(crate) unlocked: Vec<Achievement>,
}

impl ProgressUpdate {
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Band achievements earned by this update, lowest band first.
    #[must_use]
    pub fn unlocked(&self) -> &[Achievement] {
        &self.unlocked
    }
}

/// The weighted completion formula, capped at 100.
#[must_use]
pub fn weighted_progress(state: &SessionState, sizes: CatalogSizes) -> f64 {
    let cards = ratio(state.flashcards.studied.len(), sizes.flashcards) * FLASHCARD_WEIGHT;
    let quiz = if state.quiz.completed {
        ratio(state.quiz.score, sizes.quiz_items) * QUIZ_WEIGHT
    } else {
        0.0
    };
    let memory = if state.memory.completed {
        MEMORY_WEIGHT
    } else {
        0.0
    };
    (cards + quiz + memory).min(100.0)
}

/// Recomputes overall progress and collects every unearned band at or below it.
///
/// Progress never drops below the value already stored in `state`, so
/// restarting an activity cannot take progress away. Every band whose lower
/// bound has been reached is awarded, even when a single action jumps over it.
#[must_use]
pub fn recompute(state: &SessionState, sizes: CatalogSizes, now: DateTime<Utc>) -> ProgressUpdate {
    let progress = weighted_progress(state, sizes)
        .max(state.overall_progress())
        .clamp(0.0, 100.0);

    let unlocked = BANDS
        .iter()
        .filter(|(threshold, kind)| progress >= *threshold && !state.has_achievement(kind.title()))
        .map(|(_, kind)| Achievement::new(*kind, now))
        .collect();

    ProgressUpdate { progress, unlocked }
}
