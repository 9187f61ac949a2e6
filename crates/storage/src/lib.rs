#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::{DEFAULT_DATA_PATH, FileQuestionSource};
pub use repository::{InMemoryQuestionSource, QuestionSource, SourceError};
