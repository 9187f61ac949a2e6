use std::sync::Arc;

use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
