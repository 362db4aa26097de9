use dioxus::prelude::*;

use services::{ActionOutcome, StudyAction, StudyError, StudySession};
use study_core::model::Achievement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    OutOfRange,
    InvalidState,
    InvalidMove,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::OutOfRange => "That item does not exist.",
            Self::InvalidState => "That step is not available right now.",
            Self::InvalidMove => "That card cannot be turned right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&StudyError> for ViewError {
    fn from(err: &StudyError) -> Self {
        match err {
            StudyError::OutOfRange { .. } => Self::OutOfRange,
            StudyError::InvalidState(_) => Self::InvalidState,
            StudyError::InvalidMove(_) => Self::InvalidMove,
            _ => Self::Unknown,
        }
    }
}

/// Signals shared by every view.
///
/// The session lives in exactly one signal; views render from it and mutate
/// it only through [`StudyHandles::dispatch`].
#[derive(Clone, Copy, PartialEq)]
pub struct StudyHandles {
    pub session: Signal<StudySession>,
    /// Achievements waiting to be celebrated; replaced by the next unlock.
    pub celebrations: Signal<Vec<Achievement>>,
    pub last_error: Signal<Option<ViewError>>,
}

impl StudyHandles {
    #[must_use]
    pub fn new(session: StudySession) -> Self {
        Self {
            session: Signal::new(session),
            celebrations: Signal::new(Vec::new()),
            last_error: Signal::new(None),
        }
    }

    /// Applies one action. Errors are recorded for display and reported as `None`.
    pub fn dispatch(self, action: StudyAction) -> Option<ActionOutcome> {
        let mut session = self.session;
        let mut celebrations = self.celebrations;
        let mut last_error = self.last_error;

        let result = session.write().apply(action);
        match result {
            Ok(outcome) => {
                last_error.set(None);
                if !outcome.unlocked.is_empty() {
                    celebrations.set(outcome.unlocked.clone());
                }
                Some(outcome)
            }
            Err(err) => {
                last_error.set(Some(ViewError::from(&err)));
                None
            }
        }
    }

    pub fn dismiss_celebrations(self) {
        let mut celebrations = self.celebrations;
        celebrations.set(Vec::new());
    }
}
