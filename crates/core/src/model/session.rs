use serde::Serialize;

/// Rounded completion percentage for `score` out of `total`.
///
/// Rounds half up. A `total` of zero yields 0 instead of dividing by zero.
#[must_use]
pub fn completion_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    // round(score * 100 / total) == floor((score * 200 + total) / (2 * total))
    let pct = (score * 200 + total) / (total * 2);
    u32::try_from(pct).unwrap_or(100)
}

/// Final result of a finished quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    category: String,
    score: u32,
    total: u32,
}

impl ResultSummary {
    #[must_use]
    pub fn new(category: impl Into<String>, score: u32, total: u32) -> Self {
        Self {
            category: category.into(),
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        completion_percentage(self.score, self.total)
    }

    /// Text shown on the results screen.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "You scored {} out of {} ({}%)",
            self.score,
            self.total,
            self.percentage()
        )
    }
}
