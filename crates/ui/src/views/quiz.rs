use std::sync::Arc;

use dioxus::prelude::*;
use services::{QuizController, QuizIntent};

use crate::context::AppContext;
use crate::vm::{
    CategoryPickerVm, OptionVm, QuestionVm, QuizScreenVm, ResultsVm, map_quiz_screen,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let controller = use_signal(|| None::<QuizController>);

    // Loading never fails: missing data arrives as an empty bank. Until the
    // controller exists every intent is dropped.
    let quiz_loop_for_resource = Arc::clone(&quiz_loop);
    let _load = use_resource(move || {
        let quiz_loop = Arc::clone(&quiz_loop_for_resource);
        let mut controller = controller;
        async move {
            let loaded = quiz_loop.start_controller().await;
            controller.set(Some(loaded));
        }
    });

    let dispatch_intent = {
        let quiz_loop = Arc::clone(&quiz_loop);
        use_callback(move |intent: QuizIntent| {
            let mut controller = controller;
            let ticket = match controller.write().as_mut() {
                Some(active) => quiz_loop.dispatch(active, &intent),
                None => {
                    tracing::debug!(?intent, "intent ignored; question data not loaded yet");
                    None
                }
            };

            // Scoring hands back a ticket; settle it once the delay has elapsed.
            // A restart in the meantime makes the ticket stale and the settle a no-op.
            if let Some(ticket) = ticket {
                let quiz_loop = Arc::clone(&quiz_loop);
                spawn(async move {
                    quiz_loop.wait_settle().await;
                    if let Some(active) = controller.write().as_mut() {
                        quiz_loop.complete_settle(active, ticket);
                    }
                });
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let screen = controller
        .read()
        .as_ref()
        .map(|active| map_quiz_screen(&active.snapshot()));

    let body = match screen {
        None => rsx! {
            p { class: "quiz-loading", "Loading..." }
        },
        Some(QuizScreenVm::Empty { message }) => rsx! {
            p { class: "quiz-empty", "{message}" }
        },
        Some(QuizScreenVm::Picker(picker)) => rsx! {
            CategoryPicker { picker, on_intent: dispatch_intent }
        },
        Some(QuizScreenVm::Question(question)) => rsx! {
            QuestionPanel { question, on_intent: dispatch_intent }
        },
        Some(QuizScreenVm::Results(results)) => rsx! {
            ResultsPanel { results, on_intent: dispatch_intent }
        },
    };

    rsx! {
        div { class: "page quiz", {body} }
    }
}

#[component]
fn CategoryPicker(picker: CategoryPickerVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "category-picker",
            h2 { "Choose a category" }
            div { class: "category-picker-row",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    aria_label: "Previous category",
                    disabled: !picker.can_previous,
                    onclick: move |_| on_intent.call(QuizIntent::SelectCategory(-1)),
                    "Prev"
                }
                div { class: "category-picker-current",
                    h3 { class: "category-name", "{picker.name}" }
                    p { class: "category-count", "{picker.question_count_str}" }
                    p { class: "category-position", "{picker.position_str}" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    aria_label: "Next category",
                    disabled: !picker.can_next,
                    onclick: move |_| on_intent.call(QuizIntent::SelectCategory(1)),
                    "Next"
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Quiz"
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    // Advancing past the last question finishes the quiz, so both labels share one intent.
    let primary_label = question.primary.label();

    rsx! {
        section { class: "question-panel",
            header { class: "question-header",
                span { class: "question-category", "{question.category}" }
                span { class: "question-counter", "{question.counter_str}" }
                span { class: "question-score", "{question.score_str}" }
            }
            h2 { class: "question-prompt", "{question.prompt}" }
            div { class: "answer-list",
                for option in question.options.iter().cloned() {
                    AnswerButton { key: "{option.label}", option, on_intent }
                }
            }
            if let Some(feedback) = question.feedback {
                p { class: "question-feedback", "{feedback}" }
            }
            footer { class: "question-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Quit"
                }
                if question.can_finish_early {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Finish),
                        "Finish Early"
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !question.primary_enabled,
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "{primary_label}"
                }
            }
        }
    }
}

#[component]
fn AnswerButton(option: OptionVm, on_intent: Callback<QuizIntent>) -> Element {
    let label = option.label.clone();
    rsx! {
        button {
            class: "{option.class}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Toggle(label.clone())),
            "{option.caption}"
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "results-panel",
            h2 { "Quiz Complete" }
            p { class: "results-category", "{results.category}" }
            p { class: "results-headline", "{results.headline}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
