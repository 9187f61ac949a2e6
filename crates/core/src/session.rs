use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::model::{AnswerLabel, Category, Question, ResultSummary, completion_percentage};
use crate::shuffle::shuffled;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected session transitions. A rejected call leaves the session unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("category {name} has no questions")]
    EmptyCategory { name: String },

    #[error("answer {label} is not an option of the current question")]
    UnknownLabel { label: AnswerLabel },

    #[error("select at least one answer first")]
    NoSelection,

    #[error("current question was already scored")]
    AlreadyScored,

    #[error("session already finished")]
    Finished,

    #[error("settle ticket does not belong to the current question")]
    StaleTicket,
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// What happens once the settle delay after scoring elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PendingStep {
    Next,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Current question is open for selection.
    Answering,
    /// Current question is scored; markers are shown until the ticket settles.
    Settling {
        pending: PendingStep,
        verdict: Verdict,
    },
    Finished,
}

/// Names the session and question a scheduled settle belongs to.
///
/// The session only honours a ticket whose epoch and question index match its
/// own, so a callback scheduled for an earlier question or an earlier session
/// is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleTicket {
    epoch: u64,
    index: usize,
}

impl SettleTicket {
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Result of settling a scored question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    NextQuestion { index: usize },
    Finished(ResultSummary),
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Correctness marker for an option, only present once the question is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionMarker {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSnapshot {
    pub label: AnswerLabel,
    pub text: String,
    pub selected: bool,
    pub marker: Option<OptionMarker>,
}

/// Read-only view of a session, rebuilt after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub category: String,
    /// 1-based position of the current question.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionSnapshot>,
    pub selected: Vec<AnswerLabel>,
    pub score: u32,
    pub phase: SessionPhase,
    pub is_last: bool,
    pub can_advance: bool,
    pub completed: bool,
    pub percentage: Option<u32>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough of a category: a shuffled copy of its questions plus progress.
pub struct QuizSession {
    epoch: u64,
    category: String,
    order: Vec<Question>,
    current: usize,
    score: u32,
    selected: BTreeSet<AnswerLabel>,
    phase: SessionPhase,
    completed: bool,
}

impl QuizSession {
    /// Start a session over a shuffled copy of the category's questions.
    ///
    /// `epoch` identifies this session in the settle tickets it hands out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCategory` if the category has no questions.
    pub fn start<R: Rng + ?Sized>(
        category: &Category,
        epoch: u64,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        Self::from_order(category.name(), shuffled(category.questions(), rng), epoch)
    }

    /// Start a session over questions in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCategory` if `order` is empty.
    pub fn from_order(
        category: impl Into<String>,
        order: Vec<Question>,
        epoch: u64,
    ) -> Result<Self, SessionError> {
        let category = category.into();
        if order.is_empty() {
            return Err(SessionError::EmptyCategory { name: category });
        }
        Ok(Self {
            epoch,
            category,
            order,
            current: 0,
            score: 0,
            selected: BTreeSet::new(),
            phase: SessionPhase::Answering,
            completed: false,
        })
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn order(&self) -> &[Question] {
        &self.order
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.order[self.current]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<AnswerLabel> {
        &self.selected
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.order.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// True when the current question has been scored (settling or finished).
    #[must_use]
    pub fn is_scored(&self) -> bool {
        !matches!(self.phase, SessionPhase::Answering)
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        matches!(self.phase, SessionPhase::Answering) && !self.selected.is_empty()
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        let total = u32::try_from(self.order.len()).unwrap_or(u32::MAX);
        completion_percentage(self.score, total)
    }

    /// Final result, once the session has finished.
    #[must_use]
    pub fn result(&self) -> Option<ResultSummary> {
        self.completed.then(|| self.summary())
    }

    fn summary(&self) -> ResultSummary {
        let total = u32::try_from(self.order.len()).unwrap_or(u32::MAX);
        ResultSummary::new(self.category.clone(), self.score, total)
    }

    fn ticket(&self) -> SettleTicket {
        SettleTicket {
            epoch: self.epoch,
            index: self.current,
        }
    }

    fn ensure_answering(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Answering => Ok(()),
            SessionPhase::Settling { .. } => Err(SessionError::AlreadyScored),
            SessionPhase::Finished => Err(SessionError::Finished),
        }
    }

    /// Flip `label` in the current selection. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyScored` or `SessionError::Finished` once the
    /// question is scored, and `SessionError::UnknownLabel` for a label that is
    /// not an option of the current question.
    pub fn toggle_answer(&mut self, label: &AnswerLabel) -> Result<bool, SessionError> {
        self.ensure_answering()?;
        if !self.current_question().has_option(label) {
            return Err(SessionError::UnknownLabel {
                label: label.clone(),
            });
        }
        if self.selected.remove(label) {
            Ok(false)
        } else {
            self.selected.insert(label.clone());
            Ok(true)
        }
    }

    /// Score the current question and start the settle window.
    ///
    /// The pending step is `Finish` on the last question and `Next` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when nothing is selected, and
    /// `SessionError::AlreadyScored` / `SessionError::Finished` when the
    /// question was already scored.
    pub fn advance(&mut self) -> Result<SettleTicket, SessionError> {
        self.ensure_answering()?;
        if self.selected.is_empty() {
            return Err(SessionError::NoSelection);
        }
        let pending = if self.is_last_question() {
            PendingStep::Finish
        } else {
            PendingStep::Next
        };
        Ok(self.score_current(pending))
    }

    /// Score the current question (whatever is selected) and finish after settling.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyScored` while a settle is in flight, so a
    /// second call in the same window never scores twice, and
    /// `SessionError::Finished` after the session ended.
    pub fn finish_early(&mut self) -> Result<SettleTicket, SessionError> {
        self.ensure_answering()?;
        Ok(self.score_current(PendingStep::Finish))
    }

    fn score_current(&mut self, pending: PendingStep) -> SettleTicket {
        let verdict = if self.current_question().is_answered_by(&self.selected) {
            self.score = self.score.saturating_add(1);
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        tracing::debug!(
            category = %self.category,
            index = self.current,
            ?verdict,
            score = self.score,
            "question scored"
        );
        self.phase = SessionPhase::Settling { pending, verdict };
        self.ticket()
    }

    /// Complete the settle window named by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleTicket` when no settle is in flight or the
    /// ticket belongs to another session or question.
    pub fn settle(&mut self, ticket: SettleTicket) -> Result<SettleOutcome, SessionError> {
        let SessionPhase::Settling { pending, .. } = self.phase else {
            return Err(SessionError::StaleTicket);
        };
        if ticket != self.ticket() {
            return Err(SessionError::StaleTicket);
        }

        match pending {
            PendingStep::Next if !self.is_last_question() => {
                self.current += 1;
                self.selected.clear();
                self.phase = SessionPhase::Answering;
                Ok(SettleOutcome::NextQuestion {
                    index: self.current,
                })
            }
            PendingStep::Next | PendingStep::Finish => {
                self.phase = SessionPhase::Finished;
                self.completed = true;
                tracing::info!(
                    category = %self.category,
                    score = self.score,
                    total = self.order.len(),
                    "quiz finished"
                );
                Ok(SettleOutcome::Finished(self.summary()))
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let question = self.current_question();
        let scored = self.is_scored();
        let options = question
            .options()
            .iter()
            .map(|option| {
                let selected = self.selected.contains(&option.label);
                let marker = if !scored {
                    None
                } else if question.is_correct_label(&option.label) {
                    Some(OptionMarker::Correct)
                } else if selected {
                    Some(OptionMarker::Incorrect)
                } else {
                    None
                };
                OptionSnapshot {
                    label: option.label.clone(),
                    text: option.text.clone(),
                    selected,
                    marker,
                }
            })
            .collect();

        SessionSnapshot {
            category: self.category.clone(),
            number: self.current + 1,
            total: self.order.len(),
            prompt: question.prompt().to_string(),
            options,
            selected: self.selected.iter().cloned().collect(),
            score: self.score,
            phase: self.phase,
            is_last: self.is_last_question(),
            can_advance: self.can_advance(),
            completed: self.completed,
            percentage: self.completed.then(|| self.percentage()),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("epoch", &self.epoch)
            .field("category", &self.category)
            .field("order_len", &self.order.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("selected", &self.selected)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
