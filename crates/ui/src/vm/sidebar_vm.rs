use services::StudySession;

use crate::vm::stats_vm::AchievementVm;
use crate::vm::time_fmt::{format_minutes, format_percent};

/// How many achievements the sidebar lists.
pub const RECENT_ACHIEVEMENTS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarVm {
    pub progress: f64,
    pub progress_label: String,
    pub study_time_label: String,
    pub recent: Vec<AchievementVm>,
}

#[must_use]
pub fn map_sidebar(session: &StudySession) -> SidebarVm {
    let state = session.state();
    let progress = state.overall_progress();

    SidebarVm {
        progress,
        progress_label: format!("{} complete", format_percent(progress)),
        study_time_label: format!("Study time: {}", format_minutes(session.study_minutes())),
        recent: state
            .recent_achievements(RECENT_ACHIEVEMENTS)
            .iter()
            .map(AchievementVm::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use study_core::time::fixed_clock;

    #[test]
    fn sidebar_tracks_time_and_progress() {
        let mut session = StudySession::builtin(fixed_clock());
        session.clock_mut().advance(Duration::minutes(12));
        session.flip();

        let vm = map_sidebar(&session);
        assert_eq!(vm.progress_label, "3% complete");
        assert_eq!(vm.study_time_label, "Study time: 12 minutes");
        assert!(vm.recent.is_empty());
    }

    #[test]
    fn sidebar_keeps_only_latest_achievements() {
        let mut session = StudySession::builtin(fixed_clock());
        for _ in 0..session.sizes().flashcards {
            session.flip();
            session.next_card();
        }
        session.answer(session.current_quiz_item().unwrap().correct_index).unwrap();
        assert_eq!(session.state().achievements().len(), 3);

        let vm = map_sidebar(&session);
        assert_eq!(vm.recent.len(), RECENT_ACHIEVEMENTS);
        assert_eq!(vm.recent.last().map(|a| a.title), Some("Quiz Talent"));
    }
}
