mod achievement;
mod flashcard;
mod ids;
mod memory;
mod quiz;
mod session;

pub use achievement::{Achievement, AchievementKind};
pub use flashcard::Flashcard;
pub use ids::PairId;
pub use memory::{CardRole, MemoryCard, MemoryPair};
pub use quiz::{OPTION_COUNT, QuizItem};
pub use session::{FlashcardState, MemoryState, QuizState, SessionState};

pub(crate) use session::ratio;
