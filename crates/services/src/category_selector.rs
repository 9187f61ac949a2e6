use std::sync::Arc;

use quiz_core::{Category, QuestionBank};

/// Browses the bank's categories before one is committed to.
///
/// Navigation saturates at both ends. Categories are offered in source order.
#[derive(Debug, Clone)]
pub struct CategorySelector {
    bank: Arc<QuestionBank>,
    index: usize,
}

impl CategorySelector {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank, index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Category> {
        self.bank.get(self.index)
    }

    #[must_use]
    pub fn current_question_count(&self) -> usize {
        self.current().map_or(0, Category::question_count)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Move forward one category; no-op on the last one.
    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    /// Move back one category; no-op on the first one.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }

    /// Move by a signed step, clamped to the available range.
    pub fn select(&mut self, delta: isize) {
        if self.is_empty() {
            return;
        }
        let last = self.len() - 1;
        self.index = self.index.saturating_add_signed(delta).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{AnswerLabel, AnswerOption, Question};

    fn category(name: &str, count: usize) -> Category {
        let a = AnswerLabel::new("A").unwrap();
        let questions = (0..count)
            .map(|i| {
                Question::new(
                    format!("{name} {i}"),
                    vec![AnswerOption::new(a.clone(), "x")],
                    [a.clone()],
                )
                .unwrap()
            })
            .collect();
        Category::new(name, questions).unwrap()
    }

    fn selector(categories: Vec<Category>) -> CategorySelector {
        CategorySelector::new(Arc::new(QuestionBank::new(categories)))
    }

    #[test]
    fn navigation_saturates_at_bounds() {
        let mut s = selector(vec![category("Math", 3), category("History", 5)]);
        assert_eq!(s.current().map(Category::name), Some("Math"));
        assert_eq!(s.current_question_count(), 3);

        s.next();
        assert_eq!(s.current().map(Category::name), Some("History"));
        assert_eq!(s.current_question_count(), 5);

        s.next();
        assert_eq!(s.current().map(Category::name), Some("History"));

        s.previous();
        assert_eq!(s.current().map(Category::name), Some("Math"));

        s.previous();
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn signed_select_clamps() {
        let mut s = selector(vec![category("A", 1), category("B", 1), category("C", 1)]);
        s.select(10);
        assert_eq!(s.index(), 2);
        s.select(-1);
        assert_eq!(s.index(), 1);
        s.select(-10);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn single_category_is_fixed() {
        let mut s = selector(vec![category("General", 2)]);
        assert!(!s.has_next());
        assert!(!s.has_previous());
        s.next();
        s.select(3);
        s.previous();
        assert_eq!(s.index(), 0);
        assert_eq!(s.current().map(Category::name), Some("General"));
    }

    #[test]
    fn empty_bank_has_no_current() {
        let mut s = selector(Vec::new());
        s.next();
        s.select(1);
        assert!(s.current().is_none());
        assert_eq!(s.current_question_count(), 0);
    }
}
