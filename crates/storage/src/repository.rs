use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question data not found (tried {tried:?})")]
    NotFound { tried: Vec<PathBuf> },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Read-once provider of raw question data.
///
/// Implementations only fetch text; parsing and normalization happen in the
/// core loader so that every source shares one failure policy.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw question document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the data cannot be read.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// In-memory source for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryQuestionSource {
    raw: Option<String>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// A source that always reports its data as unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.raw
            .clone()
            .ok_or_else(|| SourceError::Unavailable("no data".to_string()))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
