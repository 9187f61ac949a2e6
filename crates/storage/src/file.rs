use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::repository::{QuestionSource, SourceError};

/// Default location of the question file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/questions.json";

/// Reads questions from a JSON file on disk.
///
/// Candidates are tried in order; the first existing file wins. The default
/// candidate list is the configured path followed by `data/questions.json`
/// under the current working directory.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    candidates: Vec<PathBuf>,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let primary = path.into();
        let mut candidates = vec![primary.clone()];
        if let Ok(cwd) = std::env::current_dir() {
            let fallback = cwd.join(DEFAULT_DATA_PATH);
            if fallback != primary {
                candidates.push(fallback);
            }
        }
        Self { candidates }
    }

    /// Use exactly the given candidate paths, in order.
    #[must_use]
    pub fn with_candidates(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    async fn read(path: &Path) -> Result<String, SourceError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        for path in &self.candidates {
            match tokio::fs::try_exists(path).await {
                Ok(true) => {
                    tracing::info!(path = %path.display(), "reading question data");
                    return Self::read(path).await;
                }
                Ok(false) => {
                    tracing::debug!(path = %path.display(), "question data not found here");
                }
                Err(source) => {
                    return Err(SourceError::Io {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }
        Err(SourceError::NotFound {
            tried: self.candidates.clone(),
        })
    }

    fn describe(&self) -> String {
        self.candidates
            .first()
            .map_or_else(|| "<no path>".to_string(), |p| p.display().to_string())
    }
}
