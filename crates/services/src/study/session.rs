use std::fmt;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use study_core::model::{Achievement, AchievementKind, SessionState};
use study_core::progress;
use study_core::time::study_minutes;
use study_core::{Catalog, CatalogSizes, Clock};

use crate::export::export_summary;
use crate::stats::StudyStats;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's study session over a fixed catalog.
///
/// Owns the only mutable `SessionState`; the activity controllers in this
/// module are methods on it, and readers get immutable snapshots.
#[derive(Clone)]
pub struct StudySession {
    pub(super) catalog: Catalog,
    pub(super) clock: Clock,
    pub(super) rng: StdRng,
    pub(super) state: SessionState,
}

impl StudySession {
    /// Starts a session at `clock.now()` with a randomly seeded board shuffle.
    #[must_use]
    pub fn new(catalog: Catalog, clock: Clock) -> Self {
        let state = SessionState::new(clock.now());
        debug!(started_at = %state.started_at(), "study session started");
        Self {
            catalog,
            clock,
            rng: StdRng::from_rng(&mut rand::rng()),
            state,
        }
    }

    /// Convenience for the compiled-in catalog.
    #[must_use]
    pub fn builtin(clock: Clock) -> Self {
        Self::new(Catalog::builtin(), clock)
    }

    /// Makes board shuffles reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn sizes(&self) -> CatalogSizes {
        self.catalog.sizes()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the current state for a rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Mutable access to the clock, mostly for advancing fixed clocks in tests.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn study_minutes(&self) -> i64 {
        study_minutes(self.state.started_at(), self.clock.now())
    }

    #[must_use]
    pub fn stats(&self) -> StudyStats {
        StudyStats::collect(&self.state, self.sizes())
    }

    /// Plain-text progress report stamped with the current time.
    #[must_use]
    pub fn export(&self) -> String {
        export_summary(&self.state, self.sizes(), self.clock.now())
    }

    pub(super) fn unlock(&mut self, kind: AchievementKind, unlocked: &mut Vec<Achievement>) {
        if let Some(achievement) = self.state.unlock(kind, self.clock.now()) {
            info!(title = achievement.title, "achievement unlocked");
            unlocked.push(achievement);
        }
    }

    pub(super) fn refresh_progress(&mut self, unlocked: &mut Vec<Achievement>) {
        let update = progress::recompute(&self.state, self.sizes(), self.clock.now());
        let recorded = self.state.apply_progress(update);
        debug!(progress = self.state.overall_progress(), "progress recomputed");
        for achievement in &recorded {
            info!(title = achievement.title, "achievement unlocked");
        }
        unlocked.extend(recorded);
    }
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("sizes", &self.catalog.sizes())
            .field("clock", &self.clock)
            .field("progress", &self.state.overall_progress())
            .field("achievements_len", &self.state.achievements().len())
            .finish_non_exhaustive()
    }
}
