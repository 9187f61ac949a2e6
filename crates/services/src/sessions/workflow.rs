use std::sync::Arc;
use std::time::Duration;

use quiz_core::{QuestionBank, SettleOutcome, SettleTicket};

use super::controller::{QuizController, QuizIntent};
use crate::bank_service::QuestionBankService;

/// Pause between scoring a question and moving on.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Orchestrates bank loading, intent dispatch and the timed settle step.
#[derive(Clone)]
pub struct QuizLoopService {
    banks: Arc<QuestionBankService>,
    settle_delay: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(banks: Arc<QuestionBankService>) -> Self {
        Self {
            banks,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    #[must_use]
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Load the bank once. Never fails; an empty bank means no data.
    pub async fn load_bank(&self) -> Arc<QuestionBank> {
        Arc::new(self.banks.load().await)
    }

    /// Load the bank and build a controller over it.
    pub async fn start_controller(&self) -> QuizController {
        QuizController::new(self.load_bank().await)
    }

    /// Apply an intent, swallowing rejections.
    ///
    /// Returns the ticket to schedule when the intent scored a question.
    pub fn dispatch(
        &self,
        controller: &mut QuizController,
        intent: &QuizIntent,
    ) -> Option<SettleTicket> {
        match controller.apply(intent) {
            Ok(outcome) => outcome.settle,
            Err(err) => {
                tracing::debug!(?intent, %err, "intent rejected");
                None
            }
        }
    }

    /// Sleep for the settle delay.
    pub async fn wait_settle(&self) {
        tokio::time::sleep(self.settle_delay).await;
    }

    /// Apply a settle once its delay has elapsed. Stale tickets are ignored.
    pub fn complete_settle(
        &self,
        controller: &mut QuizController,
        ticket: SettleTicket,
    ) -> Option<SettleOutcome> {
        match controller.settle(ticket) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                tracing::debug!(?ticket, %err, "settle ignored");
                None
            }
        }
    }
}
