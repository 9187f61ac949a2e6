use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::AnswerLabel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one answer option")]
    NoOptions,

    #[error("answer label {label} appears more than once")]
    DuplicateLabel { label: AnswerLabel },

    #[error("question must have at least one correct answer")]
    NoCorrectAnswer,

    #[error("correct answer {label} is not one of the options")]
    UnknownCorrectLabel { label: AnswerLabel },
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer, shown to the user as `"{label} {text}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: AnswerLabel,
    pub text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: AnswerLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with one or more correct answers.
///
/// Options keep the order they were given in; that order is what the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
    correct: BTreeSet<AnswerLabel>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, there are no options,
    /// a label repeats, no correct answer is given, or a correct label is not
    /// among the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
        correct: impl IntoIterator<Item = AnswerLabel>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(&option.label) {
                return Err(QuestionError::DuplicateLabel {
                    label: option.label.clone(),
                });
            }
        }

        let correct: BTreeSet<AnswerLabel> = correct.into_iter().collect();
        if correct.is_empty() {
            return Err(QuestionError::NoCorrectAnswer);
        }
        if let Some(label) = correct.iter().find(|label| !seen.contains(label)) {
            return Err(QuestionError::UnknownCorrectLabel {
                label: label.clone(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_labels(&self) -> &BTreeSet<AnswerLabel> {
        &self.correct
    }

    #[must_use]
    pub fn has_option(&self, label: &AnswerLabel) -> bool {
        self.options.iter().any(|option| &option.label == label)
    }

    #[must_use]
    pub fn is_correct_label(&self, label: &AnswerLabel) -> bool {
        self.correct.contains(label)
    }

    /// All-or-nothing check: the selection must equal the correct set exactly.
    #[must_use]
    pub fn is_answered_by(&self, selected: &BTreeSet<AnswerLabel>) -> bool {
        *selected == self.correct
    }
}
