mod bank;
mod category;
mod ids;
mod question;
mod session;

pub use bank::QuestionBank;
pub use category::{Category, CategoryError, GENERAL_CATEGORY};
pub use ids::{AnswerLabel, LabelError};
pub use question::{AnswerOption, Question, QuestionError};
pub use session::{ResultSummary, completion_percentage};
