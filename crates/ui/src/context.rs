use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use services::{Clock, StudySession};
use study_core::Catalog;

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn clock(&self) -> Clock;

    /// How long a mismatched memory pair stays face up.
    fn mismatch_delay(&self) -> Duration;

    /// `None` shuffles the memory board differently every launch.
    fn shuffle_seed(&self) -> Option<u64>;
    fn export_dir(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    clock: Clock,
    mismatch_delay: Duration,
    shuffle_seed: Option<u64>,
    export_dir: Arc<PathBuf>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            clock: app.clock(),
            mismatch_delay: app.mismatch_delay(),
            shuffle_seed: app.shuffle_seed(),
            export_dir: Arc::new(app.export_dir()),
        }
    }

    /// Fresh session over the configured catalog; one per window.
    #[must_use]
    pub fn start_session(&self) -> StudySession {
        let session = StudySession::new(self.catalog, self.clock);
        match self.shuffle_seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        self.export_dir.as_path()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
