//! Plain-text progress report.

use chrono::{DateTime, Utc};

use study_core::CatalogSizes;
use study_core::model::SessionState;
use study_core::time::study_minutes;

use crate::stats::StudyStats;

pub const EXPORT_TITLE: &str = "Study progress: Somatoform disorders";

/// Formats the session as a plain-text summary.
///
/// Contains the export time, per-activity figures, overall progress, elapsed
/// study minutes and every achievement with its description.
#[must_use]
pub fn export_summary(state: &SessionState, sizes: CatalogSizes, now: DateTime<Utc>) -> String {
    let stats = StudyStats::collect(state, sizes);

    let quiz_line = if stats.quiz_completed {
        format!(
            "- Quiz score: {}/{} ({:.0}%)",
            stats.quiz_score,
            stats.quiz_total,
            stats.quiz_percent()
        )
    } else {
        format!(
            "- Quiz score: not completed ({}/{} questions answered)",
            stats.quiz_answered, stats.quiz_total
        )
    };

    let mut lines = vec![
        format!("# {EXPORT_TITLE}"),
        format!("## Date: {} UTC", now.format("%d.%m.%Y %H:%M")),
        String::new(),
        "### Statistics".to_string(),
        format!(
            "- Flashcards studied: {}/{}",
            stats.cards_studied, stats.cards_total
        ),
        quiz_line,
        format!(
            "- Memory pairs found: {}/{}",
            stats.pairs_matched, stats.pairs_total
        ),
        format!("- Overall progress: {:.0}%", stats.overall_progress),
        format!(
            "- Study time: {} minutes",
            study_minutes(state.started_at(), now)
        ),
        String::new(),
        format!("### Achievements ({})", stats.achievements),
    ];
    lines.extend(
        state
            .achievements()
            .iter()
            .map(|a| format!("- {}: {}", a.title, a.description)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Suggested file name for an export made at `now`.
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("study_progress_{}.txt", now.format("%Y%m%d"))
}
