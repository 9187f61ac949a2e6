use std::time::Duration;

use quiz_core::AnswerLabel;
use services::QuizIntent;
use storage::InMemoryQuestionSource;

use super::test_harness::{SAMPLE_QUESTIONS, ViewHarness, setup_view_harness};
use crate::vm::EMPTY_BANK_MESSAGE;

const SHORT_SETTLE: Duration = Duration::from_millis(10);

fn toggle(label: &str) -> QuizIntent {
    QuizIntent::Toggle(AnswerLabel::new(label).expect("valid label"))
}

async fn loaded_harness(settle_delay: Duration) -> ViewHarness {
    let mut harness =
        setup_view_harness(InMemoryQuestionSource::new(SAMPLE_QUESTIONS), settle_delay);
    harness.load().await;
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_loading_then_picker() {
    let mut harness =
        setup_view_harness(InMemoryQuestionSource::new(SAMPLE_QUESTIONS), SHORT_SETTLE);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading state in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Math"), "missing category in {html}");
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(html.contains("1 / 2"), "missing position in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_input_while_loading() {
    let mut harness =
        setup_view_harness(InMemoryQuestionSource::new(SAMPLE_QUESTIONS), SHORT_SETTLE);
    harness.rebuild();
    harness.send(QuizIntent::Start);
    harness.send(toggle("A"));
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading state in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "expected picker in {html}");
    assert!(!html.contains("Question 1 of"), "quiz started while loading: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_bank_shows_message() {
    let mut harness = setup_view_harness(InMemoryQuestionSource::unavailable(), SHORT_SETTLE);
    harness.load().await;
    let html = harness.render();
    assert!(html.contains(EMPTY_BANK_MESSAGE), "missing empty message in {html}");
    assert!(!html.contains("Start Quiz"), "start offered without data in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_browses_categories_and_starts() {
    let mut harness = loaded_harness(SHORT_SETTLE).await;

    harness.send(QuizIntent::SelectCategory(1));
    let html = harness.render();
    assert!(html.contains("History"), "missing second category in {html}");
    assert!(html.contains("1 question"), "missing count in {html}");

    harness.send(QuizIntent::SelectCategory(-1));
    harness.send(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing counter in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(
        html.contains("A Four") || html.contains("A Six"),
        "missing option caption in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_marks_answer_then_moves_on() {
    let mut harness = loaded_harness(SHORT_SETTLE).await;
    harness.send(QuizIntent::Start);

    harness.send(toggle("A"));
    let html = harness.render();
    assert!(html.contains("answer-option selected"), "missing selection in {html}");

    harness.send(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("selected correct"), "missing marker in {html}");
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Question 1 of 2"), "advanced before settling: {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing next question in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Finish"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_wrong_answer_marks_both_options() {
    let mut harness = loaded_harness(Duration::from_secs(60)).await;
    harness.send(QuizIntent::Start);
    harness.send(toggle("B"));
    harness.send(QuizIntent::Advance);

    let html = harness.render();
    assert!(html.contains("selected incorrect"), "missing wrong marker in {html}");
    assert!(html.contains("answer-option correct"), "missing right marker in {html}");
    assert!(html.contains("Incorrect"), "missing feedback in {html}");
    assert!(html.contains("Score: 0"), "score changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_results_and_restart() {
    let mut harness = loaded_harness(SHORT_SETTLE).await;
    harness.send(QuizIntent::Start);

    for _ in 0..2 {
        harness.send(toggle("A"));
        harness.send(QuizIntent::Advance);
        harness.drive_async().await;
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("You scored 2 out of 2 (100%)"),
        "missing results in {html}"
    );

    harness.send(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "missing picker after restart in {html}");
    assert!(html.contains("Math"), "selector position lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restart_cancels_pending_settle() {
    let mut harness = loaded_harness(SHORT_SETTLE).await;
    harness.send(QuizIntent::Start);
    harness.send(toggle("A"));
    harness.send(QuizIntent::Advance);
    harness.send(QuizIntent::Restart);

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "expected picker in {html}");
    assert!(!html.contains("Question 2 of 2"), "stale settle applied: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_finish_early_scores_once() {
    let mut harness = loaded_harness(SHORT_SETTLE).await;
    harness.send(QuizIntent::Start);
    harness.send(toggle("A"));
    harness.send(QuizIntent::Finish);
    harness.send(QuizIntent::Finish);

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("You scored 1 out of 2 (50%)"),
        "missing early results in {html}"
    );
}
