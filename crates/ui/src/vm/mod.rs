mod flashcard_vm;
mod memory_vm;
mod quiz_vm;
mod sidebar_vm;
mod stats_vm;
mod time_fmt;

pub use flashcard_vm::{FlashcardVm, QUICK_JUMP_LIMIT, QuickJumpVm, map_flashcard};
pub use memory_vm::{CellFace, MemoryBoardVm, MemoryCellVm, map_memory_board};
pub use quiz_vm::{
    OptionMark, QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVerdictVm, QuizVm, map_quiz,
};
pub use sidebar_vm::{RECENT_ACHIEVEMENTS, SidebarVm, map_sidebar};
pub use stats_vm::{AchievementVm, ActivityBarVm, StatTileVm, StatsVm, map_stats};
pub use time_fmt::{format_clock_time, format_minutes, format_percent};
