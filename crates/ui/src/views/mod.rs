mod flashcards;
mod memory;
mod quiz;
mod sidebar;
mod state;
mod stats;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use flashcards::FlashcardsView;
pub use memory::MemoryView;
pub use quiz::QuizView;
pub use sidebar::{CelebrationBanner, ErrorNotice, SidebarSummary};
pub use state::{StudyHandles, ViewError};
pub use stats::StatsView;
