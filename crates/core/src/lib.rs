#![forbid(unsafe_code)]

pub mod loader;
pub mod model;
pub mod session;
pub mod shuffle;

pub use loader::{load, load_str};
pub use model::{
    AnswerLabel, AnswerOption, Category, CategoryError, GENERAL_CATEGORY, LabelError, Question,
    QuestionBank, QuestionError, ResultSummary, completion_percentage,
};
pub use session::{
    OptionMarker, OptionSnapshot, PendingStep, QuizSession, SessionError, SessionPhase,
    SessionSnapshot, SettleOutcome, SettleTicket, Verdict,
};
