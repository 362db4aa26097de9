use services::{StudySession, StudyStats};
use study_core::model::Achievement;

use crate::vm::time_fmt::{format_clock_time, format_minutes, format_percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityBarVm {
    pub label: &'static str,
    pub percent: f64,
    pub percent_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub title: &'static str,
    pub description: String,
    pub unlocked_at: String,
}

impl From<&Achievement> for AchievementVm {
    fn from(achievement: &Achievement) -> Self {
        Self {
            title: achievement.title,
            description: achievement.description.clone(),
            unlocked_at: format_clock_time(achievement.unlocked_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsVm {
    pub tiles: Vec<StatTileVm>,
    pub bars: Vec<ActivityBarVm>,
    pub overall_label: String,
    pub study_time_label: String,
    pub tips: Vec<&'static str>,
    pub achievements: Vec<AchievementVm>,
}

#[must_use]
pub fn map_stats(session: &StudySession) -> StatsVm {
    let stats = session.stats();

    StatsVm {
        tiles: map_tiles(&stats),
        bars: vec![
            bar("Flashcards", stats.card_percent()),
            bar("Quiz", stats.quiz_percent()),
            bar("Memory", stats.memory_percent()),
        ],
        overall_label: format_percent(stats.overall_progress),
        study_time_label: format_minutes(session.study_minutes()),
        tips: stats.tips().iter().map(|tip| tip.message()).collect(),
        achievements: session
            .state()
            .achievements()
            .iter()
            .map(AchievementVm::from)
            .collect(),
    }
}

fn map_tiles(stats: &StudyStats) -> Vec<StatTileVm> {
    let quiz = if stats.quiz_completed {
        format_percent(stats.quiz_percent())
    } else {
        "open".to_string()
    };
    vec![
        StatTileVm {
            label: "Cards studied",
            value: format!("{}/{}", stats.cards_studied, stats.cards_total),
        },
        StatTileVm {
            label: "Quiz score",
            value: quiz,
        },
        StatTileVm {
            label: "Pairs found",
            value: format!("{}/{}", stats.pairs_matched, stats.pairs_total),
        },
        StatTileVm {
            label: "Achievements",
            value: stats.achievements.to_string(),
        },
    ]
}

fn bar(label: &'static str, percent: f64) -> ActivityBarVm {
    ActivityBarVm {
        label,
        percent: percent.clamp(0.0, 100.0),
        percent_label: format_percent(percent),
    }
}
