use chrono::{DateTime, Utc};
use serde::Serialize;

//
// ─── ACHIEVEMENT KIND ──────────────────────────────────────────────────────────
//

/// Every achievement a learner can unlock.
///
/// The first four are progress bands awarded by the progress engine; the rest
/// are fired by activity events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstSteps,
    Halfway,
    AlmostDone,
    Master,
    FlashcardMaster,
    QuizTalent,
    Perfectionist,
    QuizExpert,
    MemoryMaster { moves: u32 },
}

impl AchievementKind {
    /// Title shown to the learner; unique per kind.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "First Steps",
            AchievementKind::Halfway => "Halfway",
            AchievementKind::AlmostDone => "Almost Done",
            AchievementKind::Master => "Master",
            AchievementKind::FlashcardMaster => "Flashcard Master",
            AchievementKind::QuizTalent => "Quiz Talent",
            AchievementKind::Perfectionist => "Perfectionist",
            AchievementKind::QuizExpert => "Quiz Expert",
            AchievementKind::MemoryMaster { .. } => "Memory Master",
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            AchievementKind::FirstSteps => "Reached 25% progress!".into(),
            AchievementKind::Halfway => "Reached 50% progress!".into(),
            AchievementKind::AlmostDone => "Reached 75% progress!".into(),
            AchievementKind::Master => "100% complete!".into(),
            AchievementKind::FlashcardMaster => "Worked through every flashcard!".into(),
            AchievementKind::QuizTalent => "First correct answer!".into(),
            AchievementKind::Perfectionist => "Scored 100% in the quiz!".into(),
            AchievementKind::QuizExpert => "Scored at least 80% in the quiz!".into(),
            AchievementKind::MemoryMaster { moves } => {
                format!("Found all pairs in {moves} moves!")
            }
        }
    }
}

//
// ─── ACHIEVEMENT ───────────────────────────────────────────────────────────────
//

/// An unlocked achievement, stamped with the moment it was earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub title: &'static str,
    pub description: String,
    pub unlocked_at: DateTime<Utc>,
}

impl Achievement {
    #[must_use]
    pub fn new(kind: AchievementKind, unlocked_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
            unlocked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn memory_master_mentions_moves() {
        let achievement = Achievement::new(AchievementKind::MemoryMaster { moves: 14 }, fixed_now());
        assert_eq!(achievement.title, "Memory Master");
        assert!(achievement.description.contains("14"));
    }

    #[test]
    fn titles_are_distinct() {
        let kinds = [
            AchievementKind::FirstSteps,
            AchievementKind::Halfway,
            AchievementKind::AlmostDone,
            AchievementKind::Master,
            AchievementKind::FlashcardMaster,
            AchievementKind::QuizTalent,
            AchievementKind::Perfectionist,
            AchievementKind::QuizExpert,
            AchievementKind::MemoryMaster { moves: 0 },
        ];
        let mut titles: Vec<_> = kinds.iter().map(AchievementKind::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), kinds.len());
    }
}
