use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::{Feedback, RevealOutcome, StudyAction, StudySession};
use study_core::Catalog;
use study_core::model::{CardRole, Flashcard, PairId};
use study_core::time::fixed_clock;

const CORRECT: [usize; 8] = [2, 3, 2, 1, 1, 3, 1, 1];

static FOUR_CARDS: [Flashcard; 4] = [
    Flashcard::new("Somatization disorder", "6+ symptoms over 2 years"),
    Flashcard::new("Hypochondriacal disorder", "6 months of conviction"),
    Flashcard::new("Conversion disorder", "Motor or sensory loss"),
    Flashcard::new("Cave!", "Avoid iatrogenic fixation"),
];

fn position_of(session: &StudySession, pair: u32, role: CardRole) -> usize {
    session
        .state()
        .memory
        .board
        .iter()
        .position(|card| card.pair_id == PairId::new(pair) && card.role == role)
        .expect("card on board")
}

fn match_pairs(session: &mut StudySession, pairs: std::ops::Range<u32>) {
    for pair in pairs {
        for role in [CardRole::Term, CardRole::Definition] {
            let position = position_of(session, pair, role);
            session
                .apply(StudyAction::Reveal { position })
                .expect("reveal");
        }
    }
}

fn study_all_cards(session: &mut StudySession) {
    for _ in 0..session.catalog().flashcards().len() {
        session.apply(StudyAction::FlipCard).expect("flip");
        session.apply(StudyAction::NextCard).expect("next");
    }
}

fn take_quiz(session: &mut StudySession, answers: &[usize]) {
    for &option in answers {
        session.apply(StudyAction::Answer { option }).expect("answer");
        session.apply(StudyAction::AdvanceQuiz).expect("advance");
    }
}

#[test]
fn perfect_session_reaches_master_once() {
    let mut session = StudySession::builtin(fixed_clock()).with_seed(1);
    study_all_cards(&mut session);
    take_quiz(&mut session, &CORRECT);
    session.apply(StudyAction::InitializeBoard).unwrap();
    match_pairs(&mut session, 0..8);

    let state = session.state();
    assert!((state.overall_progress() - 100.0).abs() < f64::EPSILON);
    let titles: Vec<_> = state.achievements().iter().map(|a| a.title).collect();
    assert_eq!(
        titles,
        vec![
            "First Steps",
            "Flashcard Master",
            "Quiz Talent",
            "Halfway",
            "Perfectionist",
            "Memory Master",
            "Almost Done",
            "Master",
        ]
    );

    // Replaying every activity must not award anything again.
    session.apply(StudyAction::RestartQuiz).unwrap();
    take_quiz(&mut session, &CORRECT);
    session.apply(StudyAction::RestartMemory).unwrap();
    session.apply(StudyAction::InitializeBoard).unwrap();
    match_pairs(&mut session, 0..8);
    study_all_cards(&mut session);
    assert_eq!(session.state().achievements().len(), 8);
}

#[test]
fn export_reports_partial_progress() {
    let builtin = Catalog::builtin();
    let catalog = Catalog::new(&FOUR_CARDS, builtin.quiz(), builtin.memory_pairs()).unwrap();
    let mut session = StudySession::new(catalog, fixed_clock()).with_seed(9);

    study_all_cards(&mut session);
    let mut answers = CORRECT;
    answers[6] = 0;
    answers[7] = 0;
    take_quiz(&mut session, &answers);
    session.apply(StudyAction::InitializeBoard).unwrap();
    match_pairs(&mut session, 0..3);

    let stats = session.stats();
    assert_eq!(stats.quiz_score, 6);
    assert!((stats.quiz_percent() - 75.0).abs() < 1e-9);
    assert!((session.state().overall_progress() - 56.25).abs() < 1e-9);

    let text = session.export();
    assert!(text.contains("- Flashcards studied: 4/4"), "{text}");
    assert!(text.contains("- Quiz score: 6/8 (75%)"), "{text}");
    assert!(text.contains("- Memory pairs found: 3/8"), "{text}");
    assert!(text.contains("- Overall progress: 56%"), "{text}");
    assert!(text.contains("- Halfway: Reached 50% progress!"), "{text}");
}

#[test]
fn random_action_sequences_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);

    for run in 0..20_u64 {
        let mut session = StudySession::builtin(fixed_clock()).with_seed(run);
        let sizes = session.sizes();
        let mut previous_progress = 0.0;

        for _ in 0..400 {
            let action = match rng.random_range(0..11) {
                0 => StudyAction::FlipCard,
                1 => StudyAction::NextCard,
                2 => StudyAction::PreviousCard,
                3 => StudyAction::JumpToCard {
                    index: rng.random_range(0..12),
                },
                4 => StudyAction::Answer {
                    option: rng.random_range(0..5),
                },
                5 => StudyAction::AdvanceQuiz,
                6 => StudyAction::RestartQuiz,
                7 => StudyAction::InitializeBoard,
                8 | 9 => StudyAction::Reveal {
                    position: rng.random_range(0..17),
                },
                _ => StudyAction::RestartMemory,
            };

            let before = session.snapshot();
            match session.apply(action) {
                Ok(outcome) => {
                    if let Feedback::Reveal(RevealOutcome::Mismatch { first, second }) =
                        outcome.feedback
                    {
                        session
                            .apply(StudyAction::ResolveMismatch { first, second })
                            .expect("resolve pending mismatch");
                    }
                }
                Err(_) => assert_eq!(session.state(), &before, "failed {action:?} mutated state"),
            }

            let state = session.state();
            let progress = state.overall_progress();
            assert!((0.0..=100.0).contains(&progress));
            assert!(progress >= previous_progress, "progress dropped after {action:?}");
            previous_progress = progress;

            assert!(state.flashcards.current < sizes.flashcards);
            assert!(state.flashcards.studied.iter().all(|&i| i < sizes.flashcards));
            assert!(state.quiz.score <= state.quiz.index + usize::from(state.quiz.answered));
            assert!(state.quiz.index <= sizes.quiz_items);
            assert_eq!(state.memory.flipped.len(), state.memory.board.len());
            assert_eq!(state.memory.matched.len(), state.memory.board.len());
            assert!(state.memory.open_positions().len() <= 1);

            let mut titles: Vec<_> = state.achievements().iter().map(|a| a.title).collect();
            let count = titles.len();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), count);
        }
    }
}
