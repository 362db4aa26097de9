use serde::Serialize;

use crate::model::ids::PairId;

/// A term and its definition, split into two board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryPair {
    pub term: &'static str,
    pub definition: &'static str,
}

impl MemoryPair {
    #[must_use]
    pub const fn new(term: &'static str, definition: &'static str) -> Self {
        Self { term, definition }
    }

    /// The two board cards derived from this pair, term first.
    #[must_use]
    pub fn cards(&self, pair_id: PairId) -> [MemoryCard; 2] {
        [
            MemoryCard {
                pair_id,
                content: self.term,
                role: CardRole::Term,
            },
            MemoryCard {
                pair_id,
                content: self.definition,
                role: CardRole::Definition,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardRole {
    Term,
    Definition,
}

/// One face-down card on the memory board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryCard {
    pub pair_id: PairId,
    pub content: &'static str,
    pub role: CardRole,
}

impl MemoryCard {
    /// Two cards match when they come from the same pair and show different roles.
    #[must_use]
    pub fn matches(&self, other: &MemoryCard) -> bool {
        self.pair_id == other.pair_id && self.role != other.role
    }
}
