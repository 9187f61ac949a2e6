#![forbid(unsafe_code)]

pub mod bank_service;
pub mod category_selector;
pub mod error;
pub mod sessions;

pub use bank_service::QuestionBankService;
pub use category_selector::CategorySelector;
pub use error::ControllerError;

pub use sessions::{
    CategoryView, ControllerSnapshot, DEFAULT_SETTLE_DELAY, IntentOutcome, QuizController,
    QuizIntent, QuizLoopService, Stage,
};
