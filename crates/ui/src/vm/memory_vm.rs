use services::StudySession;
use study_core::model::CardRole;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFace {
    Hidden,
    Open(&'static str),
    Matched(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCellVm {
    pub position: usize,
    pub face: CellFace,
    pub is_term: bool,
    /// False while a mismatch is on the table or the card is already visible.
    pub can_reveal: bool,
}

impl MemoryCellVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.face, self.is_term) {
            (CellFace::Hidden, _) => "memory-card hidden",
            (CellFace::Open(_), true) => "memory-card open term",
            (CellFace::Open(_), false) => "memory-card open definition",
            (CellFace::Matched(_), _) => "memory-card matched",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryBoardVm {
    pub moves_label: String,
    pub pairs_label: String,
    pub cells: Vec<MemoryCellVm>,
    pub completion: Option<String>,
}

#[must_use]
pub fn map_memory_board(session: &StudySession) -> MemoryBoardVm {
    let memory = &session.state().memory;
    let blocked = memory.has_pending_mismatch();

    let cells = memory
        .board
        .iter()
        .enumerate()
        .map(|(position, card)| {
            let face = if memory.matched[position] {
                CellFace::Matched(card.content)
            } else if memory.flipped[position] {
                CellFace::Open(card.content)
            } else {
                CellFace::Hidden
            };
            MemoryCellVm {
                position,
                face,
                is_term: card.role == CardRole::Term,
                can_reveal: face == CellFace::Hidden && !blocked,
            }
        })
        .collect();

    MemoryBoardVm {
        moves_label: format!("Moves: {}", memory.moves),
        pairs_label: format!(
            "Pairs: {}/{}",
            memory.matched_pairs(),
            session.sizes().memory_pairs
        ),
        cells,
        completion: memory
            .completed
            .then(|| format!("All pairs found in {} moves!", memory.moves)),
    }
}
