mod controller;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::ControllerError;
pub use controller::{IntentOutcome, QuizController, QuizIntent, Stage};
pub use view::{CategoryView, ControllerSnapshot};
pub use workflow::{DEFAULT_SETTLE_DELAY, QuizLoopService};
