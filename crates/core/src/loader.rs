//! Normalizes raw question data into a [`QuestionBank`].
//!
//! Two source shapes are accepted:
//!
//! ```json
//! { "questions": [ { "question": "...", "answers": { "A": "..." }, "correct": ["A"] } ] }
//! ```
//!
//! which becomes a single `"General"` category, or a mapping of category names:
//!
//! ```json
//! { "Math": { "questions": [ ... ] }, "History": { "items": [ ... ] } }
//! ```
//!
//! The shape is classified once, up front, into [`RawSource`]; everything past
//! that point works on the normalized form. Loading never fails: unusable input
//! produces an empty bank.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{
    AnswerLabel, AnswerOption, Category, GENERAL_CATEGORY, LabelError, Question, QuestionBank,
    QuestionError,
};

/// Field holding a category's question list.
pub const PRIMARY_LIST_FIELD: &str = "questions";
/// Fallback field used when the primary one is missing or not a list.
pub const SECONDARY_LIST_FIELD: &str = "items";

/// Source shape, decided once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSource<'a> {
    /// Top-level `questions` list, loaded as the implicit general category.
    Flat(&'a [Value]),
    /// Category name to resolved question list, in source order.
    Categorized(Vec<(&'a str, &'a [Value])>),
    /// Anything that is not a JSON object.
    Invalid,
}

impl<'a> RawSource<'a> {
    #[must_use]
    pub fn classify(raw: &'a Value) -> Self {
        let Some(object) = raw.as_object() else {
            return Self::Invalid;
        };

        if let Some(Value::Array(questions)) = object.get(PRIMARY_LIST_FIELD) {
            return Self::Flat(questions);
        }

        let categories = object
            .iter()
            .filter_map(|(name, value)| {
                let list = value.as_object().and_then(resolve_question_list);
                if list.is_none() {
                    tracing::warn!(category = %name, "category has no question list; skipped");
                }
                list.map(|list| (name.as_str(), list))
            })
            .collect();
        Self::Categorized(categories)
    }
}

fn resolve_question_list(entry: &Map<String, Value>) -> Option<&[Value]> {
    [PRIMARY_LIST_FIELD, SECONDARY_LIST_FIELD]
        .iter()
        .find_map(|field| entry.get(*field).and_then(Value::as_array))
        .map(Vec::as_slice)
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    answers: Map<String, Value>,
    correct: Vec<String>,
}

#[derive(Debug, Error)]
enum SkipReason {
    #[error("malformed question: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("answer {label} text is not a string")]
    AnswerText { label: String },
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, SkipReason> {
        let options = self
            .answers
            .into_iter()
            .map(|(label, text)| match text {
                Value::String(text) => Ok(AnswerOption::new(AnswerLabel::new(label)?, text)),
                _ => Err(SkipReason::AnswerText { label }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let correct = self
            .correct
            .into_iter()
            .map(AnswerLabel::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Question::new(self.question, options, correct)?)
    }
}

fn parse_question(value: &Value) -> Result<Question, SkipReason> {
    RawQuestion::deserialize(value)?.into_question()
}

fn normalize_category(name: &str, list: &[Value]) -> Option<Category> {
    let questions: Vec<Question> = list
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match parse_question(value) {
            Ok(question) => Some(question),
            Err(reason) => {
                tracing::warn!(category = name, index, %reason, "question skipped");
                None
            }
        })
        .collect();

    match Category::new(name, questions) {
        Ok(category) => Some(category),
        Err(err) => {
            tracing::warn!(category = name, %err, "category dropped");
            None
        }
    }
}

/// Normalize an already-parsed JSON value into a bank.
#[must_use]
pub fn load(raw: &Value) -> QuestionBank {
    let categories: Vec<Category> = match RawSource::classify(raw) {
        RawSource::Flat(list) => normalize_category(GENERAL_CATEGORY, list)
            .into_iter()
            .collect(),
        RawSource::Categorized(entries) => entries
            .into_iter()
            .filter_map(|(name, list)| normalize_category(name, list))
            .collect(),
        RawSource::Invalid => {
            tracing::warn!("question data is not an object; no categories loaded");
            Vec::new()
        }
    };

    let bank = QuestionBank::new(categories);
    tracing::info!(
        categories = bank.len(),
        questions = bank.total_questions(),
        "question bank loaded"
    );
    bank
}

/// Parse JSON text and normalize it. Parse errors give an empty bank.
#[must_use]
pub fn load_str(raw: &str) -> QuestionBank {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => load(&value),
        Err(err) => {
            tracing::warn!(%err, "question data is not valid JSON");
            QuestionBank::empty()
        }
    }
}
