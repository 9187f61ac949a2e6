use thiserror::Error;

use crate::model::question::Question;

/// Name given to the single category built from a flat question list.
pub const GENERAL_CATEGORY: &str = "General";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category {name} has no questions")]
    Empty { name: String },
}

/// A named, non-empty group of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    /// Build a selectable category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` for a blank name and
    /// `CategoryError::Empty` when `questions` is empty.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, CategoryError> {
        let raw = name.into();
        let name = raw.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if questions.is_empty() {
            return Err(CategoryError::Empty {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            questions,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
