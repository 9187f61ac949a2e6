use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label identifying one answer option within a question (e.g. `"A"`).
///
/// Labels are trimmed and never empty. Ordering is lexical so labels can live
/// in ordered sets.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnswerLabel(String);

impl AnswerLabel {
    /// Create a validated label.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Empty` if the label is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LabelError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LabelError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelError {
    #[error("answer label cannot be empty")]
    Empty,
}

impl TryFrom<String> for AnswerLabel {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnswerLabel> for String {
    fn from(label: AnswerLabel) -> Self {
        label.0
    }
}

impl FromStr for AnswerLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerLabel({})", self.0)
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_trimmed() {
        let label = AnswerLabel::new("  B ").unwrap();
        assert_eq!(label.as_str(), "B");
        assert_eq!(label.to_string(), "B");
    }

    #[test]
    fn blank_label_is_rejected() {
        assert_eq!(AnswerLabel::new("   ").unwrap_err(), LabelError::Empty);
        assert!("".parse::<AnswerLabel>().is_err());
    }

    #[test]
    fn label_deserializes_through_validation() {
        let label: AnswerLabel = serde_json::from_str("\" C\"").unwrap();
        assert_eq!(label.as_str(), "C");
        assert!(serde_json::from_str::<AnswerLabel>("\"\"").is_err());
    }
}
