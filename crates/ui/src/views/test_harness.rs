use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuestionBankService, QuizIntent, QuizLoopService};
use storage::InMemoryQuestionSource;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

pub const SAMPLE_QUESTIONS: &str = r#"{
    "Math": { "questions": [
        { "question": "2 + 2?", "answers": { "A": "Four", "B": "Five" }, "correct": ["A"] },
        { "question": "3 + 3?", "answers": { "A": "Six", "B": "Seven" }, "correct": ["A"] }
    ]},
    "History": { "items": [
        { "question": "First crewed moon landing?", "answers": { "A": "1965", "B": "1969" }, "correct": ["B"] }
    ]}
}"#;

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        "Quiz".to_string()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the question bank resource resolve.
    pub async fn load(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(source: InMemoryQuestionSource, settle_delay: Duration) -> ViewHarness {
    let banks = Arc::new(QuestionBankService::new(Arc::new(source)));
    let quiz_loop = Arc::new(QuizLoopService::new(banks).with_settle_delay(settle_delay));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
