use serde::Serialize;

use quiz_core::{ResultSummary, SessionSnapshot};

use crate::category_selector::CategorySelector;

/// Category currently offered on the start screen.
///
/// Presentation-agnostic: no pre-formatted strings beyond the category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub question_count: usize,
    /// 1-based position among the available categories.
    pub position: usize,
    pub category_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl CategoryView {
    #[must_use]
    pub fn from_selector(selector: &CategorySelector) -> Option<Self> {
        let category = selector.current()?;
        Some(Self {
            name: category.name().to_string(),
            question_count: category.question_count(),
            position: selector.index() + 1,
            category_count: selector.len(),
            has_previous: selector.has_previous(),
            has_next: selector.has_next(),
        })
    }
}

/// Everything the presentation layer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ControllerSnapshot {
    /// The bank is empty; nothing can be started.
    NoCategories,
    Browsing(CategoryView),
    InProgress(SessionSnapshot),
    Finished(ResultSummary),
}
