use chrono::Duration;
use services::StudyAction;

use super::test_harness::{ViewKind, render_view, test_session};

#[test]
fn flashcards_view_smoke_renders_face_down_card() {
    let html = render_view(ViewKind::Flashcards, test_session());

    assert!(html.contains("Somatization disorder"), "missing question in {html}");
    assert!(html.contains("Card 1 of 10"), "missing position in {html}");
    assert!(html.contains("Show answer"), "missing flip label in {html}");
    assert!(!html.contains("at least 6"), "answer leaked in {html}");
    assert!(html.contains("Card 5"), "missing quick access in {html}");
    assert!(!html.contains("Card 6<"), "quick access not capped in {html}");
}

#[test]
fn flashcards_view_smoke_renders_answer_when_flipped() {
    let mut session = test_session();
    session.apply(StudyAction::FlipCard).unwrap();

    let html = render_view(ViewKind::Flashcards, session);
    assert!(html.contains("at least 6"), "missing answer in {html}");
    assert!(html.contains("1 of 10 studied"), "missing studied count in {html}");
}

#[test]
fn quiz_view_smoke_renders_question_and_options() {
    let html = render_view(ViewKind::Quiz, test_session());

    assert!(html.contains("Question 1 of 8"), "missing heading in {html}");
    assert!(html.contains("2 years"), "missing option in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Next question"), "advance shown before answering in {html}");
}

#[test]
fn quiz_view_smoke_renders_results_after_last_question() {
    let mut session = test_session();
    for _ in 0..session.sizes().quiz_items {
        let correct = session.current_quiz_item().unwrap().correct_index;
        session.apply(StudyAction::Answer { option: correct }).unwrap();
        session.apply(StudyAction::AdvanceQuiz).unwrap();
    }

    let html = render_view(ViewKind::Quiz, session);
    assert!(html.contains("Quiz completed!"), "missing result in {html}");
    assert!(html.contains("8/8 correct"), "missing score in {html}");
    assert!(html.contains("Restart quiz"), "missing restart in {html}");
}

#[test]
fn memory_view_smoke_renders_dealt_board() {
    let mut session = test_session();
    session.apply(StudyAction::InitializeBoard).unwrap();

    let html = render_view(ViewKind::Memory, session);
    assert!(html.contains("Moves: 0"), "missing moves in {html}");
    assert!(html.contains("Pairs: 0/8"), "missing pairs in {html}");
    assert_eq!(html.matches("memory-card hidden").count(), 16, "unexpected grid in {html}");
}

#[test]
fn memory_view_smoke_shows_placeholder_before_dealing() {
    let html = render_view(ViewKind::Memory, test_session());
    assert!(html.contains("Dealing cards..."), "missing placeholder in {html}");
}

#[test]
fn stats_view_smoke_renders_figures_and_achievements() {
    let mut session = test_session();
    let correct = session.current_quiz_item().unwrap().correct_index;
    session.apply(StudyAction::Answer { option: correct }).unwrap();

    let html = render_view(ViewKind::Stats, session);
    assert!(html.contains("Cards studied"), "missing tile in {html}");
    assert!(html.contains("0/10"), "missing card count in {html}");
    assert!(html.contains("Quiz Talent"), "missing achievement in {html}");
    assert!(html.contains("22:13"), "missing unlock time in {html}");
    assert!(html.contains("Export progress"), "missing export button in {html}");
}

#[test]
fn sidebar_smoke_renders_progress_and_recent_achievements() {
    let mut session = test_session();
    session.clock_mut().advance(Duration::minutes(5));
    for _ in 0..session.sizes().flashcards {
        session.apply(StudyAction::FlipCard).unwrap();
        session.apply(StudyAction::NextCard).unwrap();
    }

    let html = render_view(ViewKind::Sidebar, session);
    assert!(html.contains("30% complete"), "missing progress in {html}");
    assert!(html.contains("Study time: 5 minutes"), "missing study time in {html}");
    assert!(html.contains("Flashcard Master"), "missing achievement in {html}");
    assert!(!html.contains("Achievement unlocked"), "stale celebration in {html}");
}
