use services::StudySession;

/// Quick-access buttons cover at most this many cards.
pub const QUICK_JUMP_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickJumpVm {
    pub index: usize,
    pub label: String,
    pub current: bool,
    pub studied: bool,
}

impl QuickJumpVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.current {
            "btn btn-small current"
        } else if self.studied {
            "btn btn-small studied"
        } else {
            "btn btn-small"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub position_label: String,
    pub studied_label: String,
    pub question: &'static str,
    /// `Some` only while the card is face up.
    pub answer: Option<&'static str>,
    pub flip_label: &'static str,
    pub quick_jumps: Vec<QuickJumpVm>,
}

impl FlashcardVm {
    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.answer.is_some() {
            "flashcard flipped"
        } else {
            "flashcard"
        }
    }
}

/// `None` when the catalog has no flashcards to show.
#[must_use]
pub fn map_flashcard(session: &StudySession) -> Option<FlashcardVm> {
    let card = session.current_flashcard()?;
    let state = &session.state().flashcards;
    let total = session.sizes().flashcards;

    let quick_jumps = (0..total.min(QUICK_JUMP_LIMIT))
        .map(|index| QuickJumpVm {
            index,
            label: format!("Card {}", index + 1),
            current: index == state.current,
            studied: state.studied.contains(&index),
        })
        .collect();

    Some(FlashcardVm {
        position_label: format!("Card {} of {total}", state.current + 1),
        studied_label: format!("{} of {total} studied", state.studied.len()),
        question: card.question,
        answer: state.flipped.then_some(card.answer),
        flip_label: if state.flipped { "Show question" } else { "Show answer" },
        quick_jumps,
    })
}
