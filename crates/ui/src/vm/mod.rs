mod instructions;
mod practice_vm;
mod renderer_vm;
mod time_fmt;

pub use instructions::instructions_for;
pub use practice_vm::{
    FeedbackVm, LANGUAGES, NoticeVm, PracticeIntent, PracticeScreenVm, SelectionVm, SummaryVm,
    map_practice_screen,
};
pub use renderer_vm::{
    AnswerAttempt, ExerciseRenderer, LetterBoard, MatchBoard, SentenceBoard, TileState,
};
pub use time_fmt::format_duration;
