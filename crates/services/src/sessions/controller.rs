use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::{
    AnswerLabel, QuestionBank, QuizSession, SessionError, SettleOutcome, SettleTicket,
};

use super::view::{CategoryView, ControllerSnapshot};
use crate::category_selector::CategorySelector;
use crate::error::ControllerError;

/// Lifecycle stage of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    InProgress,
    Finished,
}

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    SelectCategory(isize),
    Start,
    Toggle(AnswerLabel),
    Advance,
    Finish,
    Restart,
}

/// What the caller has to do after an accepted intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentOutcome {
    /// Present when a settle delay must be scheduled for this ticket.
    pub settle: Option<SettleTicket>,
}

impl IntentOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn with_settle(ticket: SettleTicket) -> Self {
        Self {
            settle: Some(ticket),
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Single owning handle for quiz progression.
///
/// Holds the category selector and at most one live session. Restarting drops
/// the session; because every session gets a fresh epoch, settle tickets issued
/// before the restart no longer match anything and are rejected.
pub struct QuizController {
    selector: CategorySelector,
    session: Option<QuizSession>,
    next_epoch: u64,
    rng: StdRng,
}

impl QuizController {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_rng(bank, StdRng::from_rng(&mut rand::rng()))
    }

    /// Build a controller with a caller-supplied RNG (deterministic in tests).
    #[must_use]
    pub fn with_rng(bank: Arc<QuestionBank>, rng: StdRng) -> Self {
        Self {
            selector: CategorySelector::new(bank),
            session: None,
            next_epoch: 1,
            rng,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        match &self.session {
            None => Stage::NotStarted,
            Some(session) if session.is_complete() => Stage::Finished,
            Some(_) => Stage::InProgress,
        }
    }

    fn session_mut(&mut self) -> Result<&mut QuizSession, ControllerError> {
        self.session.as_mut().ok_or(ControllerError::NotStarted)
    }

    /// Browse categories by a signed step. Only allowed before a quiz starts.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::SessionActive` while a session exists.
    pub fn select_category(&mut self, delta: isize) -> Result<(), ControllerError> {
        if self.session.is_some() {
            return Err(ControllerError::SessionActive);
        }
        self.selector.select(delta);
        Ok(())
    }

    /// Start a quiz over the selected category.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::SessionActive` if a session exists,
    /// `ControllerError::NoCategory` if the bank is empty, and
    /// `SessionError::EmptyCategory` for a category without questions.
    pub fn start(&mut self) -> Result<(), ControllerError> {
        if self.session.is_some() {
            return Err(ControllerError::SessionActive);
        }
        let category = self.selector.current().ok_or(ControllerError::NoCategory)?;
        let epoch = self.next_epoch;
        let session = QuizSession::start(category, epoch, &mut self.rng)?;
        tracing::info!(
            category = session.category(),
            questions = session.total(),
            epoch,
            "quiz started"
        );
        self.next_epoch += 1;
        self.session = Some(session);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ControllerError::NotStarted` without a session, or the session's
    /// rejection.
    pub fn toggle_answer(&mut self, label: &AnswerLabel) -> Result<bool, ControllerError> {
        Ok(self.session_mut()?.toggle_answer(label)?)
    }

    /// Score the current question; the returned ticket must be settled later.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NotStarted` without a session, or the session's
    /// rejection (empty selection, already scored, finished).
    pub fn advance(&mut self) -> Result<SettleTicket, ControllerError> {
        Ok(self.session_mut()?.advance()?)
    }

    /// # Errors
    ///
    /// Returns `ControllerError::NotStarted` without a session, or the session's
    /// rejection (already scored, finished).
    pub fn finish_early(&mut self) -> Result<SettleTicket, ControllerError> {
        Ok(self.session_mut()?.finish_early()?)
    }

    /// Complete a settle delay.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleTicket` for tickets from a discarded session,
    /// an earlier question, or when no settle is in flight.
    pub fn settle(&mut self, ticket: SettleTicket) -> Result<SettleOutcome, ControllerError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::StaleTicket.into());
        };
        if session.epoch() != ticket.epoch() {
            return Err(SessionError::StaleTicket.into());
        }
        Ok(session.settle(ticket)?)
    }

    /// Discard the session and go back to category selection.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NotStarted` when there is nothing to restart.
    pub fn restart(&mut self) -> Result<(), ControllerError> {
        let session = self.session.take().ok_or(ControllerError::NotStarted)?;
        tracing::info!(
            category = session.category(),
            epoch = session.epoch(),
            "quiz restarted"
        );
        Ok(())
    }

    /// Apply one user intent.
    ///
    /// # Errors
    ///
    /// Returns the rejection for intents that are not valid in the current
    /// state. A rejected intent never changes state.
    pub fn apply(&mut self, intent: &QuizIntent) -> Result<IntentOutcome, ControllerError> {
        match intent {
            QuizIntent::SelectCategory(delta) => {
                self.select_category(*delta)?;
                Ok(IntentOutcome::none())
            }
            QuizIntent::Start => {
                self.start()?;
                Ok(IntentOutcome::none())
            }
            QuizIntent::Toggle(label) => {
                self.toggle_answer(label)?;
                Ok(IntentOutcome::none())
            }
            QuizIntent::Advance => self.advance().map(IntentOutcome::with_settle),
            QuizIntent::Finish => self.finish_early().map(IntentOutcome::with_settle),
            QuizIntent::Restart => {
                self.restart()?;
                Ok(IntentOutcome::none())
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        match &self.session {
            Some(session) => match session.result() {
                Some(result) => ControllerSnapshot::Finished(result),
                None => ControllerSnapshot::InProgress(session.snapshot()),
            },
            None => CategoryView::from_selector(&self.selector)
                .map_or(ControllerSnapshot::NoCategories, ControllerSnapshot::Browsing),
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("selector_index", &self.selector.index())
            .field("categories", &self.selector.len())
            .field("session", &self.session)
            .field("next_epoch", &self.next_epoch)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
