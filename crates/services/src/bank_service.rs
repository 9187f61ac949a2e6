use std::sync::Arc;

use quiz_core::QuestionBank;
use storage::QuestionSource;

/// Fetches the question document once and normalizes it.
///
/// Any source failure is reported as an empty bank, the uniform "data
/// unavailable" signal for callers.
#[derive(Clone)]
pub struct QuestionBankService {
    source: Arc<dyn QuestionSource>,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> QuestionBank {
        match self.source.fetch().await {
            Ok(raw) => quiz_core::load_str(&raw),
            Err(err) => {
                tracing::warn!(source = %self.source.describe(), %err, "question data unavailable");
                QuestionBank::empty()
            }
        }
    }
}
