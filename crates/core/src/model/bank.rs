use crate::model::category::Category;

/// The full, normalized, read-only set of categories.
///
/// Categories keep the order they were discovered in the source. An empty bank
/// is the uniform signal that question data was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    categories: Vec<Category>,
}

impl QuestionBank {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bank from categories, keeping the first of any repeated name.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut unique: Vec<Category> = Vec::new();
        for category in categories {
            if unique.iter().any(|c| c.name() == category.name()) {
                tracing::warn!(name = category.name(), "duplicate category ignored");
                continue;
            }
            unique.push(category);
        }
        Self { categories: unique }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Question count across every category.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(Category::question_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLabel, AnswerOption, Question};

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

    #[test]
    fn bank_keeps_discovery_order() {
        let bank = QuestionBank::new([category("Math", 3), category("History", 5)]);
        let names: Vec<_> = bank.categories().iter().map(Category::name).collect();
        assert_eq!(names, ["Math", "History"]);
        assert_eq!(bank.total_questions(), 8);
        assert_eq!(bank.find("History").map(Category::question_count), Some(5));
    }

    #[test]
    fn bank_drops_repeated_names() {
        let bank = QuestionBank::new([category("Math", 1), category("Math", 4)]);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).map(Category::question_count), Some(1));
    }

    #[test]
    fn empty_bank_has_no_categories() {
        let bank = QuestionBank::empty();
        assert!(bank.is_empty());
        assert!(bank.get(0).is_none());
    }
}
