use quiz_core::{
    AnswerLabel, OptionMarker, OptionSnapshot, ResultSummary, SessionPhase, SessionSnapshot,
    Verdict,
};
use services::{CategoryView, ControllerSnapshot};

pub const EMPTY_BANK_MESSAGE: &str =
    "No questions available. Please check your questions.json file.";

/// Everything the quiz screen renders, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Empty { message: &'static str },
    Picker(CategoryPickerVm),
    Question(QuestionVm),
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPickerVm {
    pub name: String,
    pub question_count_str: String,
    pub position_str: String,
    pub can_previous: bool,
    pub can_next: bool,
}

impl From<&CategoryView> for CategoryPickerVm {
    fn from(view: &CategoryView) -> Self {
        let noun = if view.question_count == 1 {
            "question"
        } else {
            "questions"
        };
        Self {
            name: view.name.clone(),
            question_count_str: format!("{} {noun}", view.question_count),
            position_str: format!("{} / {}", view.position, view.category_count),
            can_previous: view.has_previous,
            can_next: view.has_next,
        }
    }
}

/// The button that moves the quiz forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Finish,
}

impl PrimaryAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Finish => "Finish",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: AnswerLabel,
    pub caption: String,
    pub class: String,
    pub disabled: bool,
}

fn option_class(option: &OptionSnapshot) -> String {
    let mut class = String::from("answer-option");
    if option.selected {
        class.push_str(" selected");
    }
    match option.marker {
        Some(OptionMarker::Correct) => class.push_str(" correct"),
        Some(OptionMarker::Incorrect) => class.push_str(" incorrect"),
        None => {}
    }
    class
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub category: String,
    pub counter_str: String,
    pub score_str: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub primary: PrimaryAction,
    pub primary_enabled: bool,
    /// Finishing early is offered until the current question is scored.
    pub can_finish_early: bool,
    pub feedback: Option<&'static str>,
}

impl From<&SessionSnapshot> for QuestionVm {
    fn from(snapshot: &SessionSnapshot) -> Self {
        let answering = snapshot.phase == SessionPhase::Answering;
        let feedback = match snapshot.phase {
            SessionPhase::Settling {
                verdict: Verdict::Correct,
                ..
            } => Some("Correct!"),
            SessionPhase::Settling {
                verdict: Verdict::Incorrect,
                ..
            } => Some("Incorrect"),
            SessionPhase::Answering | SessionPhase::Finished => None,
        };
        Self {
            category: snapshot.category.clone(),
            counter_str: format!("Question {} of {}", snapshot.number, snapshot.total),
            score_str: format!("Score: {}", snapshot.score),
            prompt: snapshot.prompt.clone(),
            options: snapshot
                .options
                .iter()
                .map(|option| OptionVm {
                    label: option.label.clone(),
                    caption: format!("{} {}", option.label, option.text),
                    class: option_class(option),
                    disabled: !answering,
                })
                .collect(),
            primary: if snapshot.is_last {
                PrimaryAction::Finish
            } else {
                PrimaryAction::Next
            },
            primary_enabled: snapshot.can_advance,
            can_finish_early: answering && !snapshot.is_last,
            feedback,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub category: String,
    pub headline: String,
}

impl From<&ResultSummary> for ResultsVm {
    fn from(summary: &ResultSummary) -> Self {
        Self {
            category: summary.category().to_string(),
            headline: summary.headline(),
        }
    }
}

#[must_use]
pub fn map_quiz_screen(snapshot: &ControllerSnapshot) -> QuizScreenVm {
    match snapshot {
        ControllerSnapshot::NoCategories => QuizScreenVm::Empty {
            message: EMPTY_BANK_MESSAGE,
        },
        ControllerSnapshot::Browsing(view) => QuizScreenVm::Picker(view.into()),
        ControllerSnapshot::InProgress(session) => QuizScreenVm::Question(session.into()),
        ControllerSnapshot::Finished(summary) => QuizScreenVm::Results(summary.into()),
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::{PendingStep, SessionPhase};

    use super::*;

    fn label(value: &str) -> AnswerLabel {
        AnswerLabel::new(value).unwrap()
    }

    fn snapshot(phase: SessionPhase, selected: &[&str], is_last: bool) -> SessionSnapshot {
        let scored = matches!(phase, SessionPhase::Settling { .. });
        let options = [("A", "Paris"), ("B", "Rome")]
            .into_iter()
            .map(|(l, text)| {
                let is_selected = selected.contains(&l);
                let marker = match (scored, l, is_selected) {
                    (false, _, _) => None,
                    (true, "A", _) => Some(OptionMarker::Correct),
                    (true, _, true) => Some(OptionMarker::Incorrect),
                    (true, _, false) => None,
                };
                OptionSnapshot {
                    label: label(l),
                    text: text.to_string(),
                    selected: is_selected,
                    marker,
                }
            })
            .collect();
        SessionSnapshot {
            category: "Geography".to_string(),
            number: 2,
            total: 3,
            prompt: "Capital of France?".to_string(),
            options,
            selected: selected.iter().map(|l| label(l)).collect(),
            score: 1,
            phase,
            is_last,
            can_advance: phase == SessionPhase::Answering && !selected.is_empty(),
            completed: false,
            percentage: None,
        }
    }

    #[test]
    fn question_texts_follow_the_quiz_screen() {
        let vm = QuestionVm::from(&snapshot(SessionPhase::Answering, &["B"], false));
        assert_eq!(vm.counter_str, "Question 2 of 3");
        assert_eq!(vm.score_str, "Score: 1");
        assert_eq!(vm.options[0].caption, "A Paris");
        assert_eq!(vm.options[1].class, "answer-option selected");
        assert_eq!(vm.primary, PrimaryAction::Next);
        assert!(vm.primary_enabled);
        assert!(vm.can_finish_early);
        assert!(vm.feedback.is_none());
    }

    #[test]
    fn next_is_disabled_without_a_selection() {
        let vm = QuestionVm::from(&snapshot(SessionPhase::Answering, &[], false));
        assert!(!vm.primary_enabled);
    }

    #[test]
    fn last_question_offers_finish() {
        let vm = QuestionVm::from(&snapshot(SessionPhase::Answering, &["A"], true));
        assert_eq!(vm.primary, PrimaryAction::Finish);
        assert_eq!(vm.primary.label(), "Finish");
        assert!(!vm.can_finish_early);
    }

    #[test]
    fn scored_question_shows_markers_and_locks_options() {
        let phase = SessionPhase::Settling {
            pending: PendingStep::Next,
            verdict: Verdict::Incorrect,
        };
        let vm = QuestionVm::from(&snapshot(phase, &["B"], false));
        assert_eq!(vm.options[0].class, "answer-option correct");
        assert_eq!(vm.options[1].class, "answer-option selected incorrect");
        assert!(vm.options.iter().all(|option| option.disabled));
        assert!(!vm.primary_enabled);
        assert_eq!(vm.feedback, Some("Incorrect"));
    }

    #[test]
    fn picker_and_results_are_formatted() {
        let picker = map_quiz_screen(&ControllerSnapshot::Browsing(CategoryView {
            name: "Math".to_string(),
            question_count: 1,
            position: 1,
            category_count: 2,
            has_previous: false,
            has_next: true,
        }));
        let QuizScreenVm::Picker(picker) = picker else {
            panic!("expected picker");
        };
        assert_eq!(picker.question_count_str, "1 question");
        assert_eq!(picker.position_str, "1 / 2");

        let results = map_quiz_screen(&ControllerSnapshot::Finished(ResultSummary::new(
            "Math", 2, 3,
        )));
        assert_eq!(
            results,
            QuizScreenVm::Results(ResultsVm {
                category: "Math".to_string(),
                headline: "You scored 2 out of 3 (67%)".to_string(),
            })
        );
    }

    #[test]
    fn empty_bank_maps_to_message() {
        assert_eq!(
            map_quiz_screen(&ControllerSnapshot::NoCategories),
            QuizScreenVm::Empty {
                message: EMPTY_BANK_MESSAGE
            }
        );
    }
}
