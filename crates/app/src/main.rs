mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::{QuestionBankService, QuizLoopService};
use storage::FileQuestionSource;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{AppConfig, Command, parse_args, print_usage};

const APP_NAME: &str = "Quiz";
const DEFAULT_LOG_FILTER: &str = "app=info,ui=info,services=info,storage=info,quiz_core=info";

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        APP_NAME.to_string()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if parse_args(std::env::args().skip(1)).inspect_err(|_| print_usage())? == Command::Help {
        print_usage();
        return Ok(());
    }

    init_tracing();
    let config = AppConfig::from_env()?;
    tracing::info!(
        data_path = %config.data_path.display(),
        settle_ms = config.settle_delay.as_millis(),
        "starting"
    );

    // The question file is read lazily by the UI's loading resource, not here.
    let source = Arc::new(FileQuestionSource::new(config.data_path.clone()));
    let banks = Arc::new(QuestionBankService::new(source));
    let quiz_loop =
        Arc::new(QuizLoopService::new(banks).with_settle_delay(config.settle_delay));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_inner_size(LogicalSize::new(1800.0, 900.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
